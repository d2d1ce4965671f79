//! Email: the root document component.
//!
//! Produces the complete HTML document: doctype, head with client resets and
//! the responsive stylesheet, the hidden inbox preview text and a centered
//! content container. The container is where the document decides the layout
//! mode and pixel width seen by every Row and Column below it.

use std::any::Any;

use crate::css::scalar::Length;
use crate::css::styles::StyleMap;
use crate::dom::error::ComponentError;
use crate::dom::node::ChildNode;
use crate::dom::props::Props;
use crate::widget::context::{LayoutMode, RenderContext};
use crate::widget::markup::{attr, escape_html, mso, not_mso};
use crate::widget::traits::{render_children, Component, RenderError};

/// Zero-width padding appended after the preview text so clients do not pull
/// body copy into the inbox snippet.
const PREVIEW_FILLER: &str = "&zwnj;&nbsp;";

const FIXED_BREAKPOINT_PX: u32 = 480;
const FLUID_BREAKPOINT_PX: u32 = 525;

const BASE_CSS: &[&str] = &[
    "body, html { margin: 0 !important; padding: 0 !important; font-family: Arial, sans-serif; width: 100% !important; line-height: 1.5; }",
    "* { -ms-text-size-adjust: 100%; -webkit-text-size-adjust: 100%; box-sizing: border-box; }",
    "table, td { mso-table-lspace: 0pt !important; mso-table-rspace: 0pt !important; }",
    "img { -ms-interpolation-mode: bicubic; border: 0; height: auto; line-height: 100%; outline: none; text-decoration: none; }",
];

const SMALL_SCREEN_CSS: &[&str] = &[
    ".mobile-full-width { width: 100% !important; }",
    ".mobile-padding { padding-left: 10px !important; padding-right: 10px !important; }",
    ".stack-column { display: block !important; width: 100% !important; max-width: 100% !important; }",
];

const MSO_CSS: &str = "table {border-collapse:collapse;border-spacing:0;margin:0;} div, td {padding:0;}";

const WEB_FONT_LINK: &str =
    "<link href=\"https://fonts.googleapis.com/css?family=Roboto:400,700\" rel=\"stylesheet\" type=\"text/css\">";

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

/// The root of an email tree. Also registered under the name `Document`.
///
/// # Examples
///
/// ```ignore
/// let email = Node::from(Email::new().title("Welcome").preview_text("Thanks for joining"))
///     .with_child(Node::from(Row::new()).with_child(Column::new()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub title: String,
    /// Inbox snippet. Empty falls back to the title.
    pub preview_text: String,
    /// Maximum width of the content container.
    pub width: Length,
    pub background_color: String,
    /// Document-wide layout override; `None` inherits from the render config.
    pub fluid: Option<bool>,
    pub lang: String,
    /// Extra body styles.
    pub style: StyleMap,
}

impl Default for Email {
    fn default() -> Self {
        Self {
            title: "Email Template".into(),
            preview_text: String::new(),
            width: Length::Px(600.0),
            background_color: "#ffffff".into(),
            fluid: None,
            lang: "en".into(),
            style: StyleMap::new(),
        }
    }
}

impl Email {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn preview_text(mut self, text: impl Into<String>) -> Self {
        self.preview_text = text.into();
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = Some(fluid);
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn style(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.style.set(key, value);
        self
    }

    pub fn from_props(props: &Props) -> Result<Self, ComponentError> {
        const NAME: &str = "Email";
        let mut email = Self::default();
        if let Some(title) = props.string(NAME, "title")? {
            email.title = title;
        }
        if let Some(text) = props.string(NAME, "previewText")? {
            email.preview_text = text;
        }
        if let Some(width) = props.length(NAME, "width")? {
            email.width = width;
        }
        if let Some(color) = props.string(NAME, "backgroundColor")? {
            email.background_color = color;
        }
        email.fluid = props.boolean(NAME, "fluid")?;
        if let Some(lang) = props.string(NAME, "lang")? {
            email.lang = lang;
        }
        email.style = props.style(NAME)?;
        Ok(email)
    }

    fn layout(&self, ctx: &RenderContext) -> LayoutMode {
        match self.fluid {
            Some(true) => LayoutMode::Fluid,
            Some(false) => LayoutMode::Table,
            None => ctx.layout,
        }
    }

    /// Pixel width of the content container: `width` when it is in px,
    /// otherwise the width inherited from the context.
    fn container_width(&self, ctx: &RenderContext) -> u32 {
        self.width
            .as_px()
            .map(|px| px.max(0.0).floor() as u32)
            .unwrap_or(ctx.container_width)
    }

    fn body_styles(&self) -> StyleMap {
        let mut styles = StyleMap::new()
            .with("backgroundColor", &self.background_color)
            .with("width", "100%")
            .with("margin", "0")
            .with("padding", "0")
            .with("WebkitTextSizeAdjust", "100%")
            .with("MsTextSizeAdjust", "100%");
        styles.extend(&self.style);
        styles
    }

    fn preview(&self, repeat: usize) -> String {
        let text = if self.preview_text.is_empty() {
            &self.title
        } else {
            &self.preview_text
        };
        format!(
            "<div style=\"display:none;font-size:1px;color:#ffffff;line-height:1px;max-height:0px;\
             max-width:0px;opacity:0;overflow:hidden;\">{}{}</div>",
            escape_html(text),
            PREVIEW_FILLER.repeat(repeat)
        )
    }

    fn content_container(&self, layout: LayoutMode, px: u32, content: &str) -> String {
        match layout {
            LayoutMode::Table => format!(
                "<div class=\"email-container\" {}>{content}</div>",
                attr("style", &format!("max-width: {}; margin: 0 auto;", self.width)),
            ),
            LayoutMode::Fluid => format!(
                "{}<div class=\"email-container-fluid\" {}>{content}</div>{}",
                mso(&format!(
                    "<table role=\"presentation\" width=\"{px}\" align=\"center\" border=\"0\" \
                     cellpadding=\"0\" cellspacing=\"0\"><tr><td>"
                )),
                attr("style", &format!("width: 100%; max-width: {}; margin: 0 auto;", self.width)),
                mso("</td></tr></table>"),
            ),
        }
    }
}

/// The document stylesheet, collapsed onto one line.
pub fn global_css(layout: LayoutMode) -> String {
    let breakpoint = if layout.is_fluid() {
        FLUID_BREAKPOINT_PX
    } else {
        FIXED_BREAKPOINT_PX
    };
    format!(
        "{} @media only screen and (max-width: {breakpoint}px) {{ {} }}",
        BASE_CSS.join(" "),
        SMALL_SCREEN_CSS.join(" ")
    )
}

impl Component for Email {
    fn component_type(&self) -> &str {
        "Email"
    }

    fn render(&self, ctx: &RenderContext, children: &[ChildNode]) -> Result<String, RenderError> {
        let layout = self.layout(ctx);
        let px = self.container_width(ctx);
        let child_ctx = ctx.for_children().with_layout(layout).with_container_width(px);
        let content = render_children(&child_ctx, children)?;

        let lines = [
            "<!DOCTYPE html>".to_owned(),
            format!("<html {}>", attr("lang", &self.lang)),
            "<head>".to_owned(),
            "<meta charset=\"utf-8\">".to_owned(),
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">".to_owned(),
            "<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">".to_owned(),
            "<meta name=\"x-apple-disable-message-reformatting\">".to_owned(),
            format!("<title>{}</title>", escape_html(&self.title)),
            format!("<style>{}</style>", global_css(layout)),
            mso(&format!("<style type=\"text/css\">{MSO_CSS}</style>")),
            not_mso(WEB_FONT_LINK),
            "</head>".to_owned(),
            format!("<body {}>", attr("style", &self.body_styles().to_css())),
            mso(&format!(
                "<table role=\"presentation\" width=\"100%\" {}><tr><td align=\"center\">",
                attr("style", &format!("background-color:{};", self.background_color))
            )),
            self.preview(ctx.preview_padding),
            self.content_container(layout, px, &content),
            mso("</td></tr></table>"),
            "</body>".to_owned(),
            "</html>".to_owned(),
        ];
        Ok(lines.join("\n"))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
