use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::config::{self, SubmissionConfig};
use crate::lead::{submit_lead, Field, HttpMailRelay, LeadAction, LeadFormState, LeadPayload};

const SUBMIT_LABEL: &str =
    "Quero reduzir ligações da minha clínica odontológica com atendimento automatizado";
const SUBMITTING_LABEL: &str = "Enviando...";

/// Submit control while idle or in flight.
#[derive(Debug, PartialEq, Eq)]
struct SubmitButton {
    label: &'static str,
    disabled: bool,
}

impl SubmitButton {
    fn for_state(state: &LeadFormState) -> Self {
        if state.in_flight {
            Self { label: SUBMITTING_LABEL, disabled: true }
        } else {
            Self { label: SUBMIT_LABEL, disabled: false }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    /// Hidden recipient/subject fields, read once when the app mounts.
    pub config: SubmissionConfig,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_reducer(LeadFormState::default);
    let toaster = use_toast();

    let oninput = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = Field::from_name(&input.name()) {
                dispatcher.dispatch(LeadAction::Edit(field, input.value()));
            }
        })
    };

    let onsubmit = {
        let dispatcher = form.dispatcher();
        let fields = form.fields.clone();
        let config = props.config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = LeadPayload::new(&fields, &config);
            let dispatcher = dispatcher.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let relay = HttpMailRelay::default();
                let delivery = submit_lead(&relay, &toaster, payload, |action| {
                    dispatcher.dispatch(action)
                })
                .await;
                info!("Contact form settled: {:?}", delivery);
            });
        })
    };

    let submit = SubmitButton::for_state(&form);

    html! {
        <section class="contact-section" id="contact">
            <style>
                {r#"
                    .contact-section {
                        background: #fff;
                        padding: 5rem 1rem;
                    }
                    .contact-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .contact-header {
                        text-align: center;
                        margin-bottom: 2.5rem;
                    }
                    .contact-header p {
                        font-size: 1.125rem;
                        color: #4b5563;
                    }
                    .contact-card {
                        background: #fff;
                        border: 1px solid #f3f4f6;
                        border-radius: 12px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 2rem;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input {
                        width: 100%;
                        height: 3rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 6px;
                        padding: 0 0.75rem;
                        font-size: 1rem;
                    }
                    .contact-submit {
                        width: 100%;
                        margin-top: 1.5rem;
                        padding: 1.5rem 1rem;
                        font-size: 1.125rem;
                        color: #fff;
                        background: #1e88e5;
                        border: none;
                        border-radius: 6px;
                        cursor: pointer;
                    }
                    .contact-submit:hover { background: #1565c0; }
                    .contact-submit:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .contact-disclaimer {
                        margin-top: 2rem;
                        text-align: center;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .contact-grid { grid-template-columns: 1fr; }
                        .contact-card { padding: 1.5rem; }
                    }
                "#}
            </style>
            <div class="contact-inner">
                <div class="contact-header">
                    <h2 class="section-title">{"Quer ver como funciona?"}</h2>
                    <p>
                        {"Preencha o nosso formulário abaixo, vamos te enviar uma mensagem de boas-vindas automática no WhatsApp para agendar um atendimento com nossa equipe."}
                    </p>
                </div>
                <div class="contact-card">
                    <form
                        onsubmit={onsubmit}
                        method="POST"
                        action={config::get_mail_relay_url()}
                    >
                        <input type="hidden" name="destinatario" value={props.config.recipient.clone()} />
                        <input type="hidden" name="assunto" value={props.config.subject.clone()} />

                        <div class="contact-grid">
                            { for Field::ALL.into_iter().map(|field| html! {
                                <FormField
                                    field={field}
                                    value={form.fields.get(field).to_string()}
                                    oninput={oninput.clone()}
                                />
                            }) }
                        </div>

                        <button type="submit" class="contact-submit" disabled={submit.disabled}>
                            { submit.label }
                        </button>
                    </form>
                </div>
                <div class="contact-disclaimer">
                    <p>{"Ao enviar o formulário, você concorda com a nossa Política de Privacidade."}</p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FormFieldProps {
    field: Field,
    value: String,
    oninput: Callback<InputEvent>,
}

#[function_component(FormField)]
fn form_field(props: &FormFieldProps) -> Html {
    let name = props.field.name();

    html! {
        <div class="form-field">
            <label for={name}>{ props.field.label() }</label>
            <input
                id={name}
                name={name}
                type={props.field.input_type()}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                required=true
                placeholder={props.field.placeholder()}
            />
        </div>
    }
}
