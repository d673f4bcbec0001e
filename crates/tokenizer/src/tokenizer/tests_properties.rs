//! Property tests for training and tokenization.

use super::*;
use proptest::prelude::*;

/// Every symbol is a single code point, the marker, or produced by a merge.
fn symbol_provenance_ok<'a>(
    model: &TrainedModel,
    symbols: impl IntoIterator<Item = &'a Symbol>,
) -> bool {
    let produced: Vec<Symbol> = model.merges.produced_symbols().collect();

    symbols.into_iter().all(|symbol| {
        symbol.chars().count() == 1
            || symbol.as_str() == model.end_of_word()
            || produced.contains(symbol)
    })
}

fn corpus() -> impl Strategy<Value = String> {
    "[abcé ]{0,48}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn merge_list_never_exceeds_round_limit(text in corpus(), rounds in 0usize..24) {
        let model = train(&text, rounds).unwrap();
        prop_assert!(model.merges.len() <= rounds);
        if model.merges.len() < rounds {
            prop_assert_eq!(model.state, TrainingState::Converged);
        }
    }

    #[test]
    fn vocab_symbols_come_from_merges(text in corpus(), rounds in 0usize..24) {
        let model = train(&text, rounds).unwrap();
        let symbols = model.vocab.symbols();
        prop_assert!(symbol_provenance_ok(&model, symbols.iter()));

        for (word, count) in model.vocab.iter() {
            prop_assert!(count >= 1);
            prop_assert_eq!(word.symbols().last().map(|s| s.ends_with("</w>")), Some(true));
        }
    }

    #[test]
    fn tokens_come_from_merges_and_spell_the_word(
        text in corpus(),
        query in "[abcdé]{1,8}",
        rounds in 0usize..24,
    ) {
        let model = train(&text, rounds).unwrap();
        let tokens = tokenize(&model, &query);

        prop_assert!(symbol_provenance_ok(&model, tokens.iter()));
        let spelled: String = tokens.iter().map(|t| t.as_str()).collect();
        prop_assert_eq!(spelled, format!("{}</w>", query));
    }

    #[test]
    fn tokenize_is_idempotent(text in corpus(), query in "[abc ]{0,16}", rounds in 0usize..24) {
        let model = train(&text, rounds).unwrap();
        prop_assert_eq!(tokenize(&model, &query), tokenize(&model, &query));
    }

    #[test]
    fn ranked_corpus_token_count_never_grows(text in corpus(), rounds in 0usize..23) {
        let fewer = Tokenizer::from_model(train(&text, rounds).unwrap(), EncodingMode::Ranked);
        let more = Tokenizer::from_model(train(&text, rounds + 1).unwrap(), EncodingMode::Ranked);

        prop_assert!(more.tokenize(&text).len() <= fewer.tokenize(&text).len());
    }

    #[test]
    fn more_rounds_never_add_symbols(text in corpus(), rounds in 0usize..23) {
        let fewer = train(&text, rounds).unwrap();
        let more = train(&text, rounds + 1).unwrap();

        prop_assert!(more.vocab.total_symbols() <= fewer.vocab.total_symbols());
        prop_assert_eq!(more.vocab.total_occurrences(), fewer.vocab.total_occurrences());
        prop_assert_eq!(&more.merges.pairs()[..fewer.merges.len()], fewer.merges.pairs());
    }
}
