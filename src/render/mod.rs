//! Human and machine readable output.

use crossterm::style::Stylize;

use crate::domain::mail::{Mail, Sender};
use crate::error::{Error, Result};
use crate::inbox::Inbox;
use crate::transport::Transport;

const NO_DATA: &str = "[no data to display]";
const SPAM: &str = "[SPAM]";

pub trait Render {
    /// Terminal output with ANSI colours.
    fn coloured(&self) -> Result<String>;

    fn json(&self) -> Result<String>;
}

/// `name <mail>`, whichever half is known, or the placeholder.
fn sender_line(sender: Option<&Sender>) -> String {
    let Some(s) = sender.filter(|s| !s.is_empty()) else {
        return NO_DATA.yellow().to_string();
    };
    if s.name.is_empty() {
        s.mail.as_str().yellow().to_string()
    } else if s.mail.is_empty() {
        s.name.as_str().yellow().to_string()
    } else {
        format!("{} <{}>", s.name.as_str().yellow(), s.mail.as_str().yellow())
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { NO_DATA } else { value }
}

impl<T: Transport> Render for Inbox<T> {
    fn coloured(&self) -> Result<String> {
        if self.count() == 0 {
            return Err(Error::EmptyInbox);
        }

        let mut out = String::new();
        for (i, mail) in self.items().iter().enumerate() {
            let index = (i + 1).to_string();
            out.push_str(&format!(" {index} {}", sender_line(mail.sender.as_ref())));
            if mail.is_spam {
                out.push_str(&format!(" {}", SPAM.red()));
            }
            out.push('\n');
            // Align the title with the sender, past the index column.
            out.push_str(&format!(
                "  {}{}\n\n",
                " ".repeat(index.len()),
                or_placeholder(&mail.title).cyan()
            ));
        }
        Ok(out.trim_end_matches('\n').to_string())
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

impl Render for Mail {
    fn coloured(&self) -> Result<String> {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| NO_DATA.to_string());

        let mut out = String::new();
        out.push_str("---\n");
        out.push_str(&format!(
            "{} {}\n",
            "From  :".green(),
            sender_line(self.sender.as_ref())
        ));
        out.push_str(&format!(
            "{} {}\n",
            "Title :".green(),
            or_placeholder(&self.title).cyan()
        ));
        out.push_str(&format!("{} {}\n", "Date  :".green(), date.magenta()));
        if self.is_spam {
            out.push_str(&format!("{}\n", SPAM.red()));
        }
        out.push_str("---\n");
        out.push_str(or_placeholder(&self.body));
        out.push_str("\n---");
        Ok(out)
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
