use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children into `document.body` instead of where it is used, so the
/// overlay sits above the board.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host: web_sys::Element = gloo::utils::body().into();
    create_portal(props.children.clone(), modal_host)
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Drops simple inline tags like `<i>` and `</i>` that some answers carry.
pub(crate) fn strip_markup(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        plain.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('>') {
            Some(end) if is_tag(&tail[1..end]) => rest = &tail[end + 1..],
            _ => {
                plain.push('<');
                rest = &tail[1..];
            }
        }
    }
    plain.push_str(rest);

    plain.trim().to_string()
}

fn is_tag(inner: &str) -> bool {
    let name = inner.strip_prefix('/').unwrap_or(inner);
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_markup_removes_inline_tags() {
        assert_eq!(strip_markup("<i>Moby Dick</i>"), "Moby Dick");
        assert_eq!(strip_markup("the <b>Beatles</b> "), "the Beatles");
        assert_eq!(strip_markup("plain"), "plain");
    }

    #[test]
    fn strip_markup_keeps_comparisons() {
        assert_eq!(strip_markup("x < 5 and y > 2"), "x < 5 and y > 2");
        assert_eq!(strip_markup("a <> b"), "a <> b");
        assert_eq!(strip_markup("dangling <"), "dangling <");
    }
}
