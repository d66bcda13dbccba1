/// The text a user sent, as seen by a template.
pub trait Request {
    fn text(&self) -> &str;

    /// First whitespace-delimited word, or `""` for blank text.
    fn leading_token(&self) -> &str {
        self.text().split_whitespace().next().unwrap_or("")
    }
}

impl Request for str {
    fn text(&self) -> &str {
        self
    }
}

impl Request for String {
    fn text(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request() {
        let req = "command first second third";
        assert_eq!(req.text(), req);
        assert_eq!(req.leading_token(), "command");
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!("  deploy\tnow".leading_token(), "deploy");
        assert_eq!(String::from("   ").leading_token(), "");
    }
}
