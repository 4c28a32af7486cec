//! Word counting and reading-time estimation

/// Count whitespace-separated words in raw Markdown text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate reading time for a post body
///
/// Arabic readers are assumed slower per word (150 wpm vs 200),
/// and the Arabic phrase is a fixed form regardless of count.
pub fn reading_time(text: &str, lang: &str) -> String {
    let words = word_count(text);
    let wpm = if lang == "ar" { 150 } else { 200 };
    let minutes = std::cmp::max(1, words.div_ceil(wpm));

    if lang == "ar" {
        format!("{} دقيقة قراءة", minutes)
    } else {
        format!("{} min read", minutes)
    }
}
