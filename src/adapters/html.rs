//! HTML 轉純文字行
//! 每個文字節點各自成段，再切行、trim、過濾過短的行

use crate::core::TextNormalizer;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::{Cell, RefCell};
use tendril::StrTendril;

/// 內容不算頁面文字的標籤
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// 內容須以原始文字讀取，直到對應的結束標籤
fn raw_kind(tag: &str) -> Option<RawKind> {
    match tag {
        "script" => Some(RawKind::ScriptData),
        "style" | "noscript" => Some(RawKind::Rawtext),
        _ => None,
    }
}

pub const DEFAULT_MIN_LINE_LENGTH: usize = 4;

#[derive(Debug, Default)]
struct TextCollector {
    segments: RefCell<Vec<String>>,
    current: RefCell<String>,
    skip_depth: Cell<usize>,
}

impl TextCollector {
    fn flush(&self) {
        let text = std::mem::take(&mut *self.current.borrow_mut());
        if !text.is_empty() {
            self.segments.borrow_mut().push(text);
        }
    }
}

impl TokenSink for TextCollector {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => {
                if self.skip_depth.get() == 0 {
                    self.current.borrow_mut().push_str(&text);
                }
            }
            Token::TagToken(tag) => {
                self.flush();
                let name: &str = tag.name.as_ref();
                if !SKIPPED_TAGS.contains(&name) {
                    return TokenSinkResult::Continue;
                }

                let depth = self.skip_depth.get();
                match tag.kind {
                    TagKind::StartTag => {
                        // script/style 的自閉合寫法瀏覽器仍視為開始標籤
                        if let Some(kind) = raw_kind(name) {
                            self.skip_depth.set(depth + 1);
                            return TokenSinkResult::RawData(kind);
                        }
                        if !tag.self_closing {
                            self.skip_depth.set(depth + 1);
                        }
                    }
                    TagKind::EndTag => self.skip_depth.set(depth.saturating_sub(1)),
                }
            }
            Token::EOFToken => self.flush(),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

#[derive(Debug, Clone)]
pub struct HtmlTextNormalizer {
    min_line_length: usize,
}

impl Default for HtmlTextNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LINE_LENGTH)
    }
}

impl HtmlTextNormalizer {
    pub fn new(min_line_length: usize) -> Self {
        Self { min_line_length }
    }

    fn text_segments(&self, raw: &str) -> Vec<String> {
        let tokenizer = Tokenizer::new(TextCollector::default(), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(raw));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        let collector = tokenizer.sink;
        collector.flush();
        collector.segments.into_inner()
    }
}

impl TextNormalizer for HtmlTextNormalizer {
    fn normalize(&self, raw: &str) -> Vec<String> {
        self.text_segments(raw)
            .iter()
            .flat_map(|segment| segment.lines())
            .map(str::trim)
            .filter(|line| !line.is_empty() && line.chars().count() >= self.min_line_length)
            .map(str::to_string)
            .collect()
    }
}
