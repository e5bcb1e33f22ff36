//! Lead capture: form state, the payload sent to the mail relay and the
//! submit cycle that ties them together.

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;
use yew::prelude::*;

use crate::config::{self, SubmissionConfig};

pub const SUCCESS_TITLE: &str = "Formulário enviado com sucesso!";
pub const SUCCESS_DESCRIPTION: &str = "Em breve entraremos em contato com você.";
pub const FAILURE_TITLE: &str = "Erro ao enviar";
pub const FAILURE_DESCRIPTION: &str = "Tente novamente mais tarde.";

/// Visible inputs of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Clinic,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Clinic];

    /// Value used for the input's `id` and `name` and as the form key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Clinic => "clinic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Email => "E-mail",
            Field::Phone => "Telefone",
            Field::Clinic => "Nome da clínica odontológica",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Seu nome completo",
            Field::Email => "seu@email.com",
            Field::Phone => "(00) 00000-0000",
            Field::Clinic => "Nome da sua clínica",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub clinic: String,
}

impl LeadFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Clinic => &self.clinic,
        }
    }

    /// Stores the value exactly as typed.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Clinic => self.clinic = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Everything posted to the relay for one lead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadPayload {
    pub fields: LeadFields,
    pub config: SubmissionConfig,
}

impl LeadPayload {
    pub fn new(fields: &LeadFields, config: &SubmissionConfig) -> Self {
        Self {
            fields: fields.clone(),
            config: config.clone(),
        }
    }

    /// Form keys in the order the relay script reads them.
    pub fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            (Field::Name.name(), self.fields.name.as_str()),
            (Field::Email.name(), self.fields.email.as_str()),
            (Field::Phone.name(), self.fields.phone.as_str()),
            (Field::Clinic.name(), self.fields.clinic.as_str()),
            ("destinatario", self.config.recipient.as_str()),
            ("assunto", self.config.subject.as_str()),
        ]
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to build form body: {0}")]
    Body(String),
    #[error("mail relay unreachable: {0}")]
    Network(String),
    #[error("mail relay answered with status {0}")]
    Status(u16),
}

impl From<JsValue> for RelayError {
    fn from(value: JsValue) -> Self {
        RelayError::Body(format!("{:?}", value))
    }
}

/// Transport for lead payloads.
#[async_trait(?Send)]
pub trait MailRelay {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), RelayError>;
}

/// Posts leads as multipart form data through the browser's fetch.
pub struct HttpMailRelay {
    endpoint: String,
}

impl HttpMailRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpMailRelay {
    fn default() -> Self {
        Self::new(config::get_mail_relay_url())
    }
}

#[async_trait(?Send)]
impl MailRelay for HttpMailRelay {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), RelayError> {
        let body = FormData::new()?;
        for (name, value) in payload.pairs() {
            body.append_with_str(name, value)?;
        }

        let response = Request::post(&self.endpoint)
            .body(body)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        check_status(response.status())?;
        // The relay answers with a short text we don't interpret, but an
        // unreadable body still counts as a failed delivery.
        check_body(response.text().await)
    }
}

fn check_status(status: u16) -> Result<(), RelayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RelayError::Status(status))
    }
}

fn check_body<E: std::fmt::Display>(body: Result<String, E>) -> Result<(), RelayError> {
    body.map(|_| ()).map_err(|e| RelayError::Network(e.to_string()))
}

/// Shows a short message to the visitor.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, title: &str, description: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed,
}

pub enum LeadAction {
    Edit(Field, String),
    Submitting,
    Settled(Delivery),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormState {
    pub fields: LeadFields,
    pub in_flight: bool,
}

impl LeadFormState {
    pub fn apply(&mut self, action: LeadAction) {
        match action {
            LeadAction::Edit(field, value) => self.fields.set(field, value),
            LeadAction::Submitting => self.in_flight = true,
            LeadAction::Settled(delivery) => {
                if delivery == Delivery::Sent {
                    self.fields.clear();
                }
                self.in_flight = false;
            }
        }
    }
}

impl Reducible for LeadFormState {
    type Action = LeadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Runs one submit cycle: marks the form in flight, delivers the payload,
/// tells the visitor how it went and settles the form. Never fails; the
/// outcome is returned for logging by the caller.
pub async fn submit_lead<R, N, D>(relay: &R, notifier: &N, payload: LeadPayload, dispatch: D) -> Delivery
where
    R: MailRelay + ?Sized,
    N: Notifier + ?Sized,
    D: Fn(LeadAction),
{
    dispatch(LeadAction::Submitting);

    let delivery = match relay.deliver(&payload).await {
        Ok(()) => {
            info!("Lead delivered");
            notifier.notify(SUCCESS_TITLE, SUCCESS_DESCRIPTION);
            Delivery::Sent
        }
        Err(e) => {
            warn!("Lead delivery failed: {}", e);
            notifier.notify(FAILURE_TITLE, FAILURE_DESCRIPTION);
            Delivery::Failed
        }
    };

    dispatch(LeadAction::Settled(delivery));
    delivery
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    enum Reply {
        Ok,
        Status(u16),
        Unreachable,
    }

    /// Relay double that records what it was sent and whether the form was
    /// in flight at the time.
    struct StubRelay {
        reply: Reply,
        form: Rc<RefCell<LeadFormState>>,
        sent: RefCell<Vec<LeadPayload>>,
        in_flight_seen: RefCell<Vec<bool>>,
    }

    impl StubRelay {
        fn new(reply: Reply, form: &Rc<RefCell<LeadFormState>>) -> Self {
            Self {
                reply,
                form: form.clone(),
                sent: RefCell::new(Vec::new()),
                in_flight_seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl MailRelay for StubRelay {
        async fn deliver(&self, payload: &LeadPayload) -> Result<(), RelayError> {
            self.in_flight_seen.borrow_mut().push(self.form.borrow().in_flight);
            self.sent.borrow_mut().push(payload.clone());
            match self.reply {
                Reply::Ok => Ok(()),
                Reply::Status(status) => Err(RelayError::Status(status)),
                Reply::Unreachable => Err(RelayError::Network("connection refused".into())),
            }
        }
    }

    /// Records notifications together with the in-flight flag at that moment.
    struct RecordingNotifier {
        form: Rc<RefCell<LeadFormState>>,
        seen: RefCell<Vec<(String, bool)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, _description: &str) {
            self.seen
                .borrow_mut()
                .push((title.to_string(), self.form.borrow().in_flight));
        }
    }

    fn ana() -> LeadFields {
        LeadFields {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: "11999999999".into(),
            clinic: "Clínica X".into(),
        }
    }

    fn config() -> SubmissionConfig {
        SubmissionConfig {
            recipient: "vendas@talkaio.com".into(),
            subject: "Lead LP odonto".into(),
        }
    }

    fn form_with(fields: LeadFields) -> Rc<RefCell<LeadFormState>> {
        let form = Rc::new(RefCell::new(LeadFormState::default()));
        for field in Field::ALL {
            form.borrow_mut()
                .apply(LeadAction::Edit(field, fields.get(field).to_string()));
        }
        form
    }

    fn run<N: Notifier>(
        relay: &StubRelay,
        notifier: &N,
        form: &Rc<RefCell<LeadFormState>>,
        config: &SubmissionConfig,
    ) -> Delivery {
        let payload = LeadPayload::new(&form.borrow().fields, config);
        let target = form.clone();
        block_on(submit_lead(relay, notifier, payload, move |action| {
            target.borrow_mut().apply(action)
        }))
    }

    #[test]
    fn successful_submission_notifies_once_and_resets_fields() {
        let form = form_with(ana());
        let relay = StubRelay::new(Reply::Ok, &form);
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(SUCCESS_TITLE), eq(SUCCESS_DESCRIPTION))
            .times(1)
            .return_const(());

        let delivery = run(&relay, &notifier, &form, &config());

        assert_eq!(delivery, Delivery::Sent);
        assert_eq!(form.borrow().fields, LeadFields::default());
        assert!(!form.borrow().in_flight);
    }

    #[test]
    fn server_error_notifies_failure_and_keeps_fields() {
        let form = form_with(ana());
        let relay = StubRelay::new(Reply::Status(500), &form);
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(FAILURE_TITLE), eq(FAILURE_DESCRIPTION))
            .times(1)
            .return_const(());

        let delivery = run(&relay, &notifier, &form, &config());

        assert_eq!(delivery, Delivery::Failed);
        assert_eq!(form.borrow().fields, ana());
        assert!(!form.borrow().in_flight);
    }

    #[test]
    fn network_error_is_treated_as_failure() {
        let form = form_with(ana());
        let relay = StubRelay::new(Reply::Unreachable, &form);
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(FAILURE_TITLE), eq(FAILURE_DESCRIPTION))
            .times(1)
            .return_const(());

        assert_eq!(run(&relay, &notifier, &form, &config()), Delivery::Failed);
        assert_eq!(form.borrow().fields, ana());
        assert!(!form.borrow().in_flight);
    }

    #[test]
    fn fields_reset_only_on_success_for_any_input() {
        let samples = [
            LeadFields::default(),
            ana(),
            LeadFields {
                name: "  João da Silva ".into(),
                email: "not-an-email".into(),
                phone: "+55 (11) 3333-4444".into(),
                clinic: "Odonto Sorriso & Cia".into(),
            },
        ];

        for fields in samples {
            let form = form_with(fields.clone());
            let relay = StubRelay::new(Reply::Ok, &form);
            let notifier = RecordingNotifier { form: form.clone(), seen: RefCell::new(Vec::new()) };
            run(&relay, &notifier, &form, &config());
            assert_eq!(form.borrow().fields, LeadFields::default());

            let form = form_with(fields.clone());
            let relay = StubRelay::new(Reply::Status(404), &form);
            let notifier = RecordingNotifier { form: form.clone(), seen: RefCell::new(Vec::new()) };
            run(&relay, &notifier, &form, &config());
            assert_eq!(form.borrow().fields, fields);
        }
    }

    #[test]
    fn in_flight_only_while_request_is_outstanding() {
        for reply in [Reply::Ok, Reply::Status(503)] {
            let form = form_with(ana());
            assert!(!form.borrow().in_flight);

            let relay = StubRelay::new(reply, &form);
            let notifier = RecordingNotifier { form: form.clone(), seen: RefCell::new(Vec::new()) };
            run(&relay, &notifier, &form, &config());

            assert_eq!(*relay.in_flight_seen.borrow(), vec![true]);
            // Notification happens before the flag is cleared.
            assert_eq!(notifier.seen.borrow().len(), 1);
            assert!(notifier.seen.borrow()[0].1);
            assert!(!form.borrow().in_flight);
        }
    }

    #[test]
    fn payload_carries_all_fields_and_hidden_config() {
        let form = form_with(ana());
        let relay = StubRelay::new(Reply::Ok, &form);
        let notifier = RecordingNotifier { form: form.clone(), seen: RefCell::new(Vec::new()) };

        run(&relay, &notifier, &form, &config());

        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].pairs(),
            [
                ("name", "Ana"),
                ("email", "ana@example.com"),
                ("phone", "11999999999"),
                ("clinic", "Clínica X"),
                ("destinatario", "vendas@talkaio.com"),
                ("assunto", "Lead LP odonto"),
            ]
        );
    }

    #[test]
    fn missing_config_sends_empty_hidden_fields() {
        let form = form_with(ana());
        let relay = StubRelay::new(Reply::Ok, &form);
        let notifier = RecordingNotifier { form: form.clone(), seen: RefCell::new(Vec::new()) };
        let config = SubmissionConfig::from_lookup(|_| None);

        assert_eq!(run(&relay, &notifier, &form, &config), Delivery::Sent);

        let sent = relay.sent.borrow();
        let pairs = sent[0].pairs();
        assert_eq!(pairs[4], ("destinatario", ""));
        assert_eq!(pairs[5], ("assunto", ""));
    }

    #[test]
    fn every_submit_sends_its_own_request() {
        let form = form_with(ana());
        let relay = StubRelay::new(Reply::Status(500), &form);
        let notifier = RecordingNotifier { form: form.clone(), seen: RefCell::new(Vec::new()) };

        run(&relay, &notifier, &form, &config());
        run(&relay, &notifier, &form, &config());

        assert_eq!(relay.sent.borrow().len(), 2);
        assert_eq!(notifier.seen.borrow().len(), 2);
    }

    #[test]
    fn edit_touches_only_one_field() {
        let mut state = LeadFormState::default();
        state.apply(LeadAction::Edit(Field::Phone, "11 9".into()));
        state.apply(LeadAction::Edit(Field::Phone, "11 98".into()));

        assert_eq!(
            state.fields,
            LeadFields { phone: "11 98".into(), ..LeadFields::default() }
        );
    }

    #[test]
    fn only_2xx_statuses_count_as_delivered() {
        for status in [200, 201, 204, 299] {
            assert!(check_status(status).is_ok(), "status {}", status);
        }
        for status in [199, 301, 404, 500, 503] {
            assert!(matches!(check_status(status), Err(RelayError::Status(s)) if s == status));
        }
    }

    #[test]
    fn unreadable_reply_body_is_a_failure() {
        assert!(check_body::<String>(Ok("ok".into())).is_ok());
        assert!(check_body::<String>(Ok(String::new())).is_ok());

        let err = check_body(Err("stream aborted".to_string())).unwrap_err();
        assert!(matches!(err, RelayError::Network(ref msg) if msg == "stream aborted"));
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("destinatario"), None);
        assert_eq!(Field::Email.input_type(), "email");
        assert_eq!(Field::Phone.input_type(), "text");
    }
}
