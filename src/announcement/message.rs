use html_escape::encode_text;

use crate::Announcement;

/// Zero-width space. An anchor around it is invisible in the rendered
/// message but still makes Telegram preview the linked cover image.
const INVISIBLE: char = '\u{200B}';

impl Announcement {
    /// Renders the Telegram message in HTML parse mode.
    ///
    /// Title, description and end date come from the catalog and are
    /// escaped so they cannot break the markup.
    pub fn render_html(&self) -> String {
        let mut message = String::new();
        if let Some(image) = &self.image_url {
            message.push_str(&format!("<a href=\"{image}\">{INVISIBLE}</a>"));
        }
        message.push_str(&format!("🎮 <b>{}</b>\n", encode_text(&self.title_block())));
        message.push_str(&format!("📝 {}\n", encode_text(&self.description)));
        message.push_str(&format!("🕓 Free until {}\n", encode_text(&self.ends_at)));
        message.push_str(&format!("🔗 <a href=\"{}\">Claim it now</a>", self.link));
        message
    }

    /// Whether Telegram's link preview should stay off for this message.
    ///
    /// With a cover anchor present the preview is what displays the image,
    /// so it must stay enabled; without one there is nothing worth
    /// previewing and the claim link would expand instead.
    pub fn disable_preview(&self) -> bool {
        self.image_url.is_none()
    }

    /// The localized title joins the primary one only when it actually
    /// differs, otherwise the primary stands alone.
    fn title_block(&self) -> String {
        match &self.localized_title {
            Some(localized) if localized != &self.title => {
                format!("{}\n{}", self.title, localized)
            }
            _ => self.title.clone(),
        }
    }
}
