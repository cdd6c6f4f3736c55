use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default pass: trim, NFKC, fold CR/CRLF to LF
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        let text: String = text.nfkc().collect();

        text.replace("\r\n", "\n").replace('\r', "\n")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
