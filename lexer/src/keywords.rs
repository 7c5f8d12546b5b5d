/// Reserved words. `else` is reserved even though no statement accepts it.
pub const KEYWORDS: [&str; 5] = ["int", "float", "double", "if", "else"];

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}
