//! Structural test for "is this statement line a transaction?"
//!
//! Expected text rows after PDF-to-text:
//!   Jan 5  Jan 6  COFFEE SHOP              $4.50
//!   Dec 30 Jan 2  AIRLINE TICKET DENVER    $1,234.56

use regex::Regex;

/// Tokens of a line that passed classification.
///
/// The token boundaries found here are the ones the extractor uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> ClassifiedLine<'a> {
    /// `Mmm` and day of the transaction date
    pub fn trans_date(&self) -> (&'a str, &'a str) {
        (self.tokens[0], self.tokens[1])
    }

    /// `Mmm` and day of the post date
    pub fn post_date(&self) -> (&'a str, &'a str) {
        (self.tokens[2], self.tokens[3])
    }

    /// Everything between the post date and the amount
    pub fn description(&self) -> &[&'a str] {
        let end = self.tokens.len() - 1;
        self.tokens.get(4..end).unwrap_or(&[])
    }

    pub fn amount(&self) -> &'a str {
        self.tokens[self.tokens.len() - 1]
    }
}

/// Classifies whitespace-tokenized lines by shape only: two `Mmm D` dates up
/// front and a `$1,234.56` amount at the end. Dates and amounts are not
/// checked for meaning here.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    date_re: Regex,
    amount_re: Regex,
}

impl LineClassifier {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            date_re: Regex::new(r"^[A-Z][a-z]{2} \d{1,2}$")?,
            amount_re: Regex::new(r"^\$\d{1,3}(,\d{3})*\.\d{2}$")?,
        })
    }

    /// Split `line` on whitespace and classify it.
    pub fn classify<'a>(&self, line: &'a str) -> Option<ClassifiedLine<'a>> {
        self.classify_tokens(line.split_whitespace().collect())
    }

    /// Classify an already tokenized line.
    pub fn classify_tokens<'a>(&self, tokens: Vec<&'a str>) -> Option<ClassifiedLine<'a>> {
        if tokens.len() < 4 {
            return None;
        }
        if !self.is_date(tokens[0], tokens[1]) || !self.is_date(tokens[2], tokens[3]) {
            return None;
        }
        if !self.is_amount(tokens[tokens.len() - 1]) {
            return None;
        }
        Some(ClassifiedLine { tokens })
    }

    /// `Jan 5`, `Dec 31`
    pub fn is_date(&self, month: &str, day: &str) -> bool {
        self.date_re.is_match(&format!("{month} {day}"))
    }

    /// `$0.00`, `$1,234.56`
    pub fn is_amount(&self, token: &str) -> bool {
        self.amount_re.is_match(token)
    }
}
