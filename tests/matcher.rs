use protosearch::fuzzy_matcher::subsequence::{SubsequenceMatcher, fuzzy_indices};
use protosearch::fuzzy_matcher::{FuzzyMatcher, fold_upper};
use rand::RngExt as _;

const ALPHABET: [char; 8] = ['a', 'b', 'A', 'B', 'e', '.', '_', 'é'];

fn random_string(rng: &mut impl rand::Rng, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())]).collect()
}

fn is_subsequence(query: &str, choice: &str) -> bool {
    let mut choice = choice.chars().map(fold_upper);
    query.chars().map(fold_upper).all(|q| choice.any(|c| c == q))
}

#[test]
fn matcher_protocol_titles() {
    assert_eq!(fuzzy_indices("DOM.enable", "dom").map(|(_, m)| m), Some(vec![0, 1, 2]));
    assert_eq!(fuzzy_indices("setBreakpoint", "stb").map(|(_, m)| m), Some(vec![0, 2, 3]));

    let matcher = SubsequenceMatcher::new("xyz");
    let mut indices = vec![42];
    assert_eq!(matcher.score("abc", Some(&mut indices)), 0);
    assert!(indices.is_empty());
}

#[test]
fn matcher_case_and_adjacency_preferences() {
    let caps = SubsequenceMatcher::new("Ab");
    assert!(caps.score("Ab", None) > caps.score("ab", None));

    let plain = SubsequenceMatcher::new("ab");
    assert!(plain.score("ab", None) > plain.score("a_b", None));
}

#[test]
fn matcher_empty_inputs() {
    assert_eq!(SubsequenceMatcher::new("").score("DOM.enable", None), 0);
    assert_eq!(SubsequenceMatcher::new("dom").score("", None), 0);
    assert_eq!(SubsequenceMatcher::new("").score("", None), 0);
}

#[test]
fn matcher_random_choices() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let query = random_string(&mut rng, 4);
        let matcher = SubsequenceMatcher::new(&query);

        for _ in 0..10 {
            let choice = random_string(&mut rng, 24);
            let mut indices = Vec::new();
            let score = matcher.score(&choice, Some(&mut indices));

            if query.is_empty() || !is_subsequence(&query, &choice) {
                assert_eq!(score, 0, "{query:?} on {choice:?}");
                assert!(indices.is_empty());
                continue;
            }

            assert!(score > 0, "{query:?} on {choice:?}");
            assert_eq!(indices.len(), query.chars().count());
            assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");

            let choice_chars: Vec<char> = choice.chars().collect();
            for (q, &idx) in query.chars().zip(&indices) {
                assert!(idx < choice_chars.len());
                assert_eq!(fold_upper(q), fold_upper(choice_chars[idx]), "{query:?} on {choice:?}");
            }

            // a reused matcher agrees with a fresh one
            assert_eq!(
                SubsequenceMatcher::new(&query).fuzzy_indices(&choice),
                Some((score, indices))
            );
        }
    }
}

#[test]
fn matcher_shared_across_threads() {
    let matcher = SubsequenceMatcher::new("bp");
    let choices = ["Debugger.setBreakpoint", "Debugger.removeBreakpoint", "DOM.enable"];
    let expected: Vec<_> = choices.iter().map(|c| matcher.fuzzy_indices(c)).collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    let got: Vec<_> = choices.iter().map(|c| matcher.fuzzy_indices(c)).collect();
                    assert_eq!(got, expected);
                }
            });
        }
    });
}
