use log::info;

/// Mail relay that turns lead submissions into e-mails for the sales team.
pub const MAIL_RELAY_URL: &str = "https://webdesign.freshlab.com.br/lp-mail/lp-mail.php";

/// Id of the element the app is mounted on. It doubles as the carrier of
/// the submission settings written into index.html.
pub const HOST_ELEMENT_ID: &str = "root";
pub const RECIPIENT_ATTRIBUTE: &str = "data-destinatario";
pub const SUBJECT_ATTRIBUTE: &str = "data-assunto";

pub fn get_mail_relay_url() -> &'static str {
    MAIL_RELAY_URL
}

/// Hidden fields sent along with every lead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionConfig {
    pub recipient: String,
    pub subject: String,
}

impl SubmissionConfig {
    /// Builds the config from an attribute lookup. Missing attributes become
    /// empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            recipient: lookup(RECIPIENT_ATTRIBUTE).unwrap_or_default(),
            subject: lookup(SUBJECT_ATTRIBUTE).unwrap_or_default(),
        }
    }

    /// Reads the attributes of the host element. A page without the element
    /// still gets a usable (empty) config.
    pub fn from_host_element() -> Self {
        let host = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(HOST_ELEMENT_ID));

        match host {
            Some(element) => {
                let config = Self::from_lookup(|name| element.get_attribute(name));
                info!(
                    "Loaded submission config (recipient set: {}, subject set: {})",
                    !config.recipient.is_empty(),
                    !config.subject.is_empty()
                );
                config
            }
            None => {
                info!("Host element #{} not found, using empty submission config", HOST_ELEMENT_ID);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn reads_both_attributes() {
        let attrs: HashMap<&str, &str> = [
            ("data-destinatario", "vendas@talkaio.com"),
            ("data-assunto", "Novo lead odonto"),
        ]
        .into_iter()
        .collect();

        let config = SubmissionConfig::from_lookup(|name| attrs.get(name).map(|v| v.to_string()));

        assert_eq!(config.recipient, "vendas@talkaio.com");
        assert_eq!(config.subject, "Novo lead odonto");
    }

    #[test]
    fn missing_attributes_default_to_empty() {
        let config = SubmissionConfig::from_lookup(|name| {
            (name == SUBJECT_ATTRIBUTE).then(|| "Contato".to_string())
        });
        assert_eq!(config.recipient, "");
        assert_eq!(config.subject, "Contato");

        assert_eq!(SubmissionConfig::from_lookup(|_| None), SubmissionConfig::default());
    }
}
