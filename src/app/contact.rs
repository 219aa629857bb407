use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_email, validate_non_empty_string};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_ACK_WINDOW: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        title: "Email",
        value: "mustafa39078@gmail.com",
        link: Some("mailto:mustafa39078@gmail.com"),
    },
    ContactChannel {
        title: "Phone",
        value: "+92 3286557992",
        link: Some("tel:+92 3286557992"),
    },
    ContactChannel {
        title: "Location",
        value: "Remote & Global",
        link: None,
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name).map_err(into_input_error)?;
        validate_email("email", &self.email)?;
        validate_non_empty_string("subject", &self.subject).map_err(into_input_error)?;
        validate_non_empty_string("message", &self.message).map_err(into_input_error)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// 表單欄位錯誤屬於使用者輸入，不是設定錯誤
fn into_input_error(err: SiteError) -> SiteError {
    match err {
        SiteError::InvalidConfigValueError { field, .. } => SiteError::ValidationError {
            message: format!("Please fill in your {}", field),
        },
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub submitted_at: DateTime<Utc>,
    #[serde(skip)]
    pub ack_window: Duration,
}

impl Submission {
    /// 送出後的確認訊息只顯示一段時間
    pub fn is_acknowledged_at(&self, now: DateTime<Utc>) -> bool {
        let window = chrono::Duration::from_std(self.ack_window).unwrap_or(chrono::Duration::zero());
        now >= self.submitted_at && now < self.submitted_at + window
    }
}

/// 聯絡表單的示範送出：等待固定時間後視為成功並清空表單，實際上不會傳送任何資料。
#[derive(Debug, Clone)]
pub struct ContactDesk {
    submit_delay: Duration,
    ack_window: Duration,
}

impl Default for ContactDesk {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY, DEFAULT_ACK_WINDOW)
    }
}

impl ContactDesk {
    pub fn new(submit_delay: Duration, ack_window: Duration) -> Self {
        Self {
            submit_delay,
            ack_window,
        }
    }

    pub async fn submit(&self, form: &mut ContactForm) -> Result<Submission> {
        form.validate()?;

        tracing::info!("Submitting contact form (subject: {})", form.subject);
        tokio::time::sleep(self.submit_delay).await;

        form.clear();
        Ok(Submission {
            submitted_at: Utc::now(),
            ack_window: self.ack_window,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "New website".to_string(),
            message: "We need a portfolio site.".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_clears_form_after_delay() {
        let desk = ContactDesk::default();
        let mut form = filled_form();
        let started = tokio::time::Instant::now();

        let submission = desk.submit(&mut form).await.unwrap();

        assert!(started.elapsed() >= DEFAULT_SUBMIT_DELAY);
        assert_eq!(form, ContactForm::default());
        assert!(submission.is_acknowledged_at(submission.submitted_at));
        assert!(!submission.is_acknowledged_at(
            submission.submitted_at + chrono::Duration::seconds(6)
        ));
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_and_form_kept() {
        let desk = ContactDesk::new(Duration::ZERO, DEFAULT_ACK_WINDOW);
        let mut form = filled_form();
        form.subject = "  ".to_string();

        let err = desk.submit(&mut form).await.unwrap_err();

        assert!(matches!(err, SiteError::ValidationError { ref message } if message.contains("subject")));
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        assert!(form.validate().is_err());
    }
}
