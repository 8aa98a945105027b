use corpus_rank::index::SearchConfig;
use corpus_rank::normalize::{fold, normalize, Language, Normalizer, StopWords};
use proptest::prelude::*;

#[test]
fn invariant_accent_and_case_invariance() {
    let none = StopWords::empty();
    assert_eq!(normalize("Café", &none), normalize("cafe", &none));
    assert_eq!(normalize("CANCIÓN", &none), normalize("cancion", &none));
    assert_eq!(normalize("Pingüino", &none), vec!["pinguino"]);
}

#[test]
fn invariant_punctuation_never_part_of_token() {
    let tokens = normalize("¿Dónde?¡Aquí! (sol) [luna]; mar—río", &StopWords::empty());
    assert_eq!(tokens, vec!["donde", "aqui", "sol", "luna", "mar", "rio"]);
}

#[test]
fn invariant_underscore_and_digits_are_word_characters() {
    let tokens = normalize("var_1 2024 x-2", &StopWords::empty());
    assert_eq!(tokens, vec!["var_1", "2024", "x", "2"]);
}

#[test]
fn invariant_empty_and_blank_input() {
    let spanish = StopWords::for_language(Language::Spanish);
    assert!(normalize("", &spanish).is_empty());
    assert!(normalize(" \n\t ", &spanish).is_empty());
    assert!(normalize("de la que el en", &spanish).is_empty());
}

#[test]
fn invariant_custom_stop_words_replace_global_state() {
    let custom = Normalizer::new(StopWords::new(["gato"]));
    let spanish = Normalizer::for_language(Language::Spanish);

    assert_eq!(custom.normalize("el gato negro"), vec!["el", "negro"]);
    assert_eq!(spanish.normalize("el gato negro"), vec!["gato", "negro"]);
}

#[test]
fn invariant_english_configuration() {
    let normalizer = Normalizer::from_config(&SearchConfig::v0().with_language(Language::English));
    assert_eq!(
        normalizer.normalize("The cat and the Dog"),
        vec!["cat", "dog"]
    );
}

#[test]
fn invariant_fold_is_stable() {
    let once = fold("Árbol ÑANDÚ");
    assert_eq!(once, "arbol nandu");
    assert_eq!(fold(&once), once);
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "[a-zA-ZáéíóúñÁÉÍÓÚÑüÜ0-9_ ,.;!?]{0,64}") {
        let stop_words = StopWords::for_language(Language::Spanish);
        let once = normalize(&text, &stop_words);
        let twice = normalize(&once.join(" "), &stop_words);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn stop_words_never_survive(
        words in prop::collection::vec(
            prop::sample::select(vec!["el", "La", "gato", "Está", "perro", "DE", "más", "sol"]),
            0..24,
        )
    ) {
        let stop_words = StopWords::for_language(Language::Spanish);
        let tokens = normalize(&words.join(" "), &stop_words);
        for token in &tokens {
            prop_assert!(!stop_words.contains(token), "stop word leaked: {}", token);
        }
        let content_words = words
            .iter()
            .filter(|w| matches!(w.to_lowercase().as_str(), "gato" | "perro" | "sol"))
            .count();
        prop_assert_eq!(tokens.len(), content_words);
    }
}
