use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

/// Arguments come from the URL hash, e.g. `#-vv&--categories=4&--seed=7`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    let hash_args = location_hash.split(['#', '&']).filter(|arg| !arg.is_empty());
    Args::try_parse_from(std::iter::once(env!("CARGO_PKG_NAME")).chain(hash_args))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = parse_args(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse_args("").unwrap();

        assert_eq!(args.game.categories, 6);
        assert_eq!(args.game.clues, 5);
        assert_eq!(args.game.seed, None);
    }

    #[test]
    fn hash_arguments_are_split_on_ampersands() {
        let args = parse_args("#-vv&--categories=4&--clues=3&--seed=7").unwrap();

        assert_eq!(args.game.categories, 4);
        assert_eq!(args.game.clues, 3);
        assert_eq!(args.game.seed, Some(7));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn unknown_hash_argument_is_an_error() {
        assert!(parse_args("#--lives=3").is_err());
    }
}
