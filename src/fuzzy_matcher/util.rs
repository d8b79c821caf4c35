/// Folds a character to its upper-case form.
///
/// Characters whose upper-case mapping is not exactly one character (`ß` -> `SS`)
/// fold to themselves, so that folded strings keep a 1:1 index mapping with the
/// original text.
#[inline]
pub fn fold_upper(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_uppercase();
    }
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// Cheap subsequence check used to reject a choice before running the DP.
///
/// Both sides are expected to be folded with [`fold_upper`] already. Pattern
/// characters never act as operators: `.` only matches a literal `.`.
pub fn cheap_matches(choice: impl IntoIterator<Item = char>, pattern: &[char]) -> Option<()> {
    let mut choice = choice.into_iter();
    for &p in pattern {
        choice.find(|&c| c == p)?;
    }
    Some(())
}

#[cfg(test)]
pub fn wrap_matches(line: &str, indices: &[usize]) -> String {
    let mut ret = String::new();
    let mut peekable = indices.iter().peekable();
    for (idx, ch) in line.chars().enumerate() {
        if peekable.peek().is_some_and(|&&next_id| next_id == idx) {
            ret.push_str(&format!("[{ch}]"));
            peekable.next();
        } else {
            ret.push(ch);
        }
    }

    ret
}

/// Asserts that `choices` are already sorted from best to worst for `pattern`.
#[cfg(test)]
pub fn assert_order(pattern: &str, choices: &[&'static str]) {
    use crate::fuzzy_matcher::subsequence::SubsequenceMatcher;

    let matcher = SubsequenceMatcher::new(pattern);
    let mut scored: Vec<(u32, &'static str)> = choices.iter().map(|&c| (matcher.score(c, None), c)).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    let result: Vec<&'static str> = scored.into_iter().map(|(_, c)| c).collect();

    assert_eq!(result, choices);
}
