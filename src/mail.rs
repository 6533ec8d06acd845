//! Mail management functions of the Beget API.
//!
//! Beget API docs: <https://beget.com/en/kb/api/functions-for-work-with-mail>

use crate::{Client, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A mailbox on a Beget-hosted domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
    /// Local part of the address.
    pub mailbox: String,
    /// Domain the mailbox belongs to.
    pub domain: String,
    /// Whether incoming mail is spam filtered.
    pub spam_filter_status: SpamFilterStatus,
    /// What happens to incoming mail.
    pub forward_mail_status: ForwardMailStatus,
}

/// One entry of a mailbox forwarding list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardMailbox {
    /// Full address mail is forwarded to.
    pub forward_mailbox: String,
}

/// Whether the spam filter is on. Sent as an integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum SpamFilterStatus {
    /// `0`
    Disabled,
    /// `1`
    Enabled,
    /// Any other value, kept as sent.
    Other(i64),
}

impl From<i64> for SpamFilterStatus {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Disabled,
            1 => Self::Enabled,
            other => Self::Other(other),
        }
    }
}

impl From<SpamFilterStatus> for i64 {
    fn from(status: SpamFilterStatus) -> Self {
        match status {
            SpamFilterStatus::Disabled => 0,
            SpamFilterStatus::Enabled => 1,
            SpamFilterStatus::Other(value) => value,
        }
    }
}

/// What happens to mail that arrives in a mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ForwardMailStatus {
    /// `"no_forward"`: keep mail in the mailbox.
    NoForward,
    /// `"forward"`: forward and keep a copy.
    Forward,
    /// `"forward_and_delete"`: forward and delete the original.
    ForwardAndDelete,
    /// Any other value, kept as sent.
    Other(String),
}

impl ForwardMailStatus {
    /// The wire name of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NoForward => "no_forward",
            Self::Forward => "forward",
            Self::ForwardAndDelete => "forward_and_delete",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for ForwardMailStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "no_forward" => Self::NoForward,
            "forward" => Self::Forward,
            "forward_and_delete" => Self::ForwardAndDelete,
            _ => Self::Other(value),
        }
    }
}

impl From<ForwardMailStatus> for String {
    fn from(status: ForwardMailStatus) -> Self {
        match status {
            ForwardMailStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Settings accepted by [`Client::change_mailbox_settings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailboxSettings {
    /// Turn the spam filter on or off.
    pub spam_filter_status: SpamFilterStatus,
    /// Spam filter aggressiveness, 0-100. Left unchanged when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spam_filter: Option<u8>,
    /// Forwarding mode.
    pub forward_mail_status: ForwardMailStatus,
}

impl MailboxSettings {
    /// Create settings without a spam filter level.
    pub fn new(spam_filter_status: SpamFilterStatus, forward_mail_status: ForwardMailStatus) -> Self {
        Self {
            spam_filter_status,
            spam_filter: None,
            forward_mail_status,
        }
    }

    /// Set the spam filter level.
    pub fn spam_filter(mut self, level: u8) -> Self {
        self.spam_filter = Some(level);
        self
    }
}

impl Client {
    /// List all mailboxes on `domain`.
    ///
    /// # Examples
    /// ```no_run
    /// # use beget_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), beget_client::Error> {
    /// let client = Client::new("login", "password")?;
    /// for mailbox in client.get_mailbox_list("example.com").await? {
    ///     println!("{}@{}", mailbox.mailbox, mailbox.domain);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_mailbox_list(&self, domain: &str) -> Result<Vec<Mailbox>> {
        self.call("mail/getMailboxList", &json!({ "domain": domain }))
            .await
    }

    /// Change the password of a mailbox.
    pub async fn change_mailbox_password(
        &self,
        domain: &str,
        mailbox: &str,
        password: &str,
    ) -> Result<bool> {
        let input = json!({
            "domain": domain,
            "mailbox": mailbox,
            "mailbox_password": password,
        });
        self.call("mail/changeMailboxPassword", &input).await
    }

    /// Create a mailbox on `domain`.
    ///
    /// # Examples
    /// ```no_run
    /// # use beget_client::Client;
    /// # #[tokio::main]
    /// # async fn main() {
    /// let client = Client::new("login", "password").unwrap();
    /// match client.create_mailbox("example.com", "info", "s3cret").await {
    ///     Ok(_) => println!("created"),
    ///     Err(beget_client::Error::Api(errors)) => eprintln!("rejected: {errors}"),
    ///     Err(e) => eprintln!("request failed: {e}"),
    /// }
    /// # }
    /// ```
    pub async fn create_mailbox(&self, domain: &str, mailbox: &str, password: &str) -> Result<bool> {
        let input = json!({
            "domain": domain,
            "mailbox": mailbox,
            "mailbox_password": password,
        });
        self.call("mail/createMailbox", &input).await
    }

    /// Delete a mailbox.
    pub async fn drop_mailbox(&self, domain: &str, mailbox: &str) -> Result<bool> {
        let input = json!({ "domain": domain, "mailbox": mailbox });
        self.call("mail/dropMailbox", &input).await
    }

    /// Update spam filter and forwarding settings of a mailbox.
    pub async fn change_mailbox_settings(
        &self,
        domain: &str,
        mailbox: &str,
        settings: MailboxSettings,
    ) -> Result<bool> {
        #[derive(Serialize)]
        struct Input<'a> {
            domain: &'a str,
            mailbox: &'a str,
            #[serde(flatten)]
            settings: MailboxSettings,
        }

        let input = Input {
            domain,
            mailbox,
            settings,
        };
        self.call("mail/changeMailboxSettings", &input).await
    }

    /// Add `forward_mailbox` to the forwarding list of a mailbox.
    pub async fn forward_list_add_mailbox(
        &self,
        domain: &str,
        mailbox: &str,
        forward_mailbox: &str,
    ) -> Result<bool> {
        let input = json!({
            "domain": domain,
            "mailbox": mailbox,
            "forward_mailbox": forward_mailbox,
        });
        self.call("mail/forwardListAddMailbox", &input).await
    }

    /// Remove `forward_mailbox` from the forwarding list of a mailbox.
    pub async fn forward_list_delete_mailbox(
        &self,
        domain: &str,
        mailbox: &str,
        forward_mailbox: &str,
    ) -> Result<bool> {
        let input = json!({
            "domain": domain,
            "mailbox": mailbox,
            "forward_mailbox": forward_mailbox,
        });
        self.call("mail/forwardListDeleteMailbox", &input).await
    }

    /// Show the forwarding list of a mailbox.
    pub async fn forward_list_show(&self, domain: &str, mailbox: &str) -> Result<Vec<ForwardMailbox>> {
        let input = json!({ "domain": domain, "mailbox": mailbox });
        self.call("mail/forwardListShow", &input).await
    }

    /// Route all mail for `domain` into `domain_mailbox`.
    pub async fn set_domain_mail(&self, domain: &str, domain_mailbox: &str) -> Result<bool> {
        let input = json!({ "domain": domain, "domain_mailbox": domain_mailbox });
        self.call("mail/setDomainMail", &input).await
    }

    /// Remove the domain mailbox set with [`Client::set_domain_mail`].
    pub async fn clear_domain_mail(&self, domain: &str) -> Result<bool> {
        self.call("mail/clearDomainMail", &json!({ "domain": domain }))
            .await
    }
}
