//! Plain-text parser for catalog files.
//!
//! # Format
//! ```text
//! Title: fluoride varnish
//! Image: images/page2.png
//! Content: 1- ion exchange
//! 2- decrease surface energy
//!
//! Title: ionic toothbrush
//! ```

use crate::error::ParseError;
use crate::types::StudyItem;

type Result<T> = std::result::Result<T, ParseError>;

/// Parse catalog text into study items, in file order.
pub fn parse(content: &str) -> Result<Vec<StudyItem>> {
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut parser = Parser::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        parser.process_line(line, line_num)?;
    }

    parser.finalize()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Title,
    Image,
    Content,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Image => "image",
            Self::Content => "content",
        }
    }
}

struct ItemBuilder {
    title: String,
    image: Option<String>,
    content: Option<String>,
}

impl ItemBuilder {
    fn new(title: String) -> Self {
        Self {
            title,
            image: None,
            content: None,
        }
    }

    fn build(self) -> StudyItem {
        StudyItem {
            title: self.title.trim().to_string(),
            content: self.content.unwrap_or_default().trim().to_string(),
            image: self.image.unwrap_or_default().trim().to_string(),
        }
    }
}

struct Parser {
    items: Vec<StudyItem>,
    current: Option<ItemBuilder>,
    current_field: Option<Field>,
    buffer: Vec<String>,
}

impl Parser {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            current_field: None,
            buffer: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<()> {
        match Self::parse_line(line) {
            LineType::Field(Field::Title, text) => self.handle_title(text, line_num)?,
            LineType::Field(field, text) => self.handle_field(field, text, line_num)?,
            LineType::Text(text) => self.buffer.push(text.to_string()),
            LineType::Empty => self.buffer.push(String::new()),
        }
        Ok(())
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("Title:") {
            LineType::Field(Field::Title, rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("Image:") {
            LineType::Field(Field::Image, rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("Content:") {
            LineType::Field(Field::Content, rest.trim())
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Text(line)
        }
    }

    fn handle_title(&mut self, text: &str, line_num: usize) -> Result<()> {
        self.flush_buffer();

        if text.is_empty() {
            return Err(ParseError::EmptyTitle { line: line_num });
        }

        if let Some(item) = self.current.take() {
            self.items.push(item.build());
        }
        self.current = Some(ItemBuilder::new(text.to_string()));
        self.current_field = Some(Field::Title);
        Ok(())
    }

    fn handle_field(&mut self, field: Field, text: &str, line_num: usize) -> Result<()> {
        self.flush_buffer();

        let Some(ref item) = self.current else {
            return Err(ParseError::MissingTitle { line: line_num });
        };

        let already_set = match field {
            Field::Image => item.image.is_some(),
            Field::Content => item.content.is_some(),
            Field::Title => false,
        };
        if already_set {
            return Err(ParseError::DuplicateField {
                field: field.name(),
                line: line_num,
            });
        }

        self.current_field = Some(field);
        self.buffer.push(text.to_string());
        Ok(())
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let content = self.buffer.join("\n");
        self.buffer.clear();

        if let Some(ref mut item) = self.current {
            match self.current_field {
                // Continuation lines after a title fold into the title.
                Some(Field::Title) => {
                    let continued = content.trim();
                    if !continued.is_empty() {
                        item.title.push(' ');
                        item.title.push_str(continued);
                    }
                }
                Some(Field::Image) => item.image = Some(content),
                Some(Field::Content) => item.content = Some(content),
                None => {}
            }
        }
    }

    fn finalize(mut self) -> Result<Vec<StudyItem>> {
        self.flush_buffer();

        if let Some(item) = self.current.take() {
            self.items.push(item.build());
        }

        Ok(self.items)
    }
}

enum LineType<'a> {
    Field(Field, &'a str),
    Text(&'a str),
    Empty,
}
