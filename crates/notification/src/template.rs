use askama::Template;
use jungmarker_contact::{Lead, NotifyError};

#[derive(Template)]
#[template(path = "lead-notification.txt")]
pub struct LeadNotificationTemplate<'a> {
    pub lead: &'a Lead,
}

#[derive(Template)]
#[template(path = "auto-reply.txt")]
pub struct AutoReplyTemplate<'a> {
    pub first_name: &'a str,
}

pub fn render<T: Template>(template: T) -> Result<String, NotifyError> {
    template
        .render()
        .map(|text| text.trim_end().to_owned())
        .map_err(|e| NotifyError::Message(e.to_string()))
}
