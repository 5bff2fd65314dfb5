//! Contact form component

use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use site_core::contact::{
    deliver, ContactForm as FormModel, FormField, FormPhase, Service, SubmitOutcome, COUNTRY_CODES,
};
use site_core::SiteConfig;

use crate::api::FetchTransport;
use crate::browser::{self, DataLayer};

fn success_view() -> impl IntoView {
    view! {
        <div class="form-success" role="status">
            <span class="icon icon-check" aria-hidden="true"></span>
            <h2>"Thank you!"</h2>
            <p>"Your message has been sent. We'll get back to you shortly."</p>
        </div>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = StoredValue::new(expect_context::<SiteConfig>());
    let form = RwSignal::new(config.with_value(FormModel::new));
    let phase = Memo::new(move |_| form.with(FormModel::phase));
    let success_timer = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(Some(handle)) = success_timer.try_get_value() {
            handle.clear();
        }
        form.try_update(FormModel::unmount);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let prepared = match form.try_update(|f| f.begin_submit(&browser::page_url(), Utc::now())) {
            Some(Ok(prepared)) => prepared,
            Some(Err(rejection)) => {
                log::debug!("Submission refused: {:?}", rejection);
                return;
            }
            None => return,
        };

        let transport = config.with_value(FetchTransport::new);
        let success_display = config.with_value(|c| c.success_display);
        spawn_local(async move {
            let response = deliver(&prepared, &transport, &DataLayer).await;
            let Some(outcome) = form.try_update(|f| f.finish_submit(response)) else {
                return;
            };

            if let SubmitOutcome::Sent(ticket) = outcome {
                let expire = move || {
                    form.try_update(|f| f.expire_success(ticket));
                };
                match set_timeout_with_handle(expire, success_display) {
                    Ok(handle) => {
                        success_timer.try_update_value(|slot| {
                            if let Some(old) = slot.replace(handle) {
                                old.clear();
                            }
                        });
                    }
                    Err(e) => log::warn!("Failed to schedule success reset: {:?}", e),
                }
            }
        });
    };

    let text_input = move |field: FormField, label: &'static str, kind: &'static str, required: bool| {
        view! {
            <div class="field">
                <label for=field.name()>{label}</label>
                <input
                    id=field.name()
                    name=field.name()
                    type=kind
                    required=required
                    prop:value=move || form.with(|f| f.state().field(field).to_string())
                    on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                />
            </div>
        }
    };

    let submitting = move || form.with(FormModel::is_submitting);

    // Rebuilt each time the success view gives way to a fresh form
    let form_view = move || {
        let form_name = config.with_value(|c| c.form_name.clone());
        let hidden_form_name = form_name.clone();

        let country_options = COUNTRY_CODES
            .iter()
            .map(|cc| {
                view! {
                    <option value=cc.code>{format!("{} {}", cc.code, cc.country)}</option>
                }
            })
            .collect_view();

        let service_boxes = Service::ALL
            .into_iter()
            .map(|service| {
                view! {
                    <label class="service-option">
                        <input
                            type="checkbox"
                            name=service.id()
                            prop:checked=move || form.with(|f| f.state().services.is_selected(service))
                            on:change=move |_| form.update(|f| f.toggle_service(service))
                        />
                        <span>{service.label()}</span>
                    </label>
                }
            })
            .collect_view();

        view! {
            <form
                class="contact-form"
                name=form_name
                method="POST"
                data-netlify="true"
                netlify-honeypot="bot-field"
                on:submit=on_submit
            >
                <input type="hidden" name="form-name" value=hidden_form_name />
                // Out of sight and out of autofill; only bots fill it
                <p style="display:none" aria-hidden="true">
                    <label>
                        "Don't fill this out if you're human: "
                        <input
                            name=FormField::Honeypot.name()
                            tabindex="-1"
                            autocomplete="off"
                            prop:value=move || form.with(|f| f.state().honeypot.clone())
                            on:input=move |ev| {
                                form.update(|f| f.set_field(FormField::Honeypot, event_target_value(&ev)))
                            }
                        />
                    </label>
                </p>

                <fieldset class="form-fields" disabled=submitting>
                    <fieldset class="services">
                        <legend>"What are you interested in?"</legend>
                        {service_boxes}
                    </fieldset>

                    {text_input(FormField::FirstName, "Name *", "text", true)}
                    {text_input(FormField::CompanyName, "Company", "text", false)}
                    {text_input(FormField::Email, "Email *", "email", true)}

                    <div class="field phone">
                        <label for="phone">"Phone"</label>
                        <div class="phone-row">
                            <select
                                name="countryCode"
                                prop:value=move || form.with(|f| f.state().country_code.clone())
                                on:change=move |ev| {
                                    form.update(|f| f.set_country_code(event_target_value(&ev)))
                                }
                            >
                                {country_options}
                            </select>
                            <input
                                id="phone"
                                name=FormField::Phone.name()
                                type="tel"
                                prop:value=move || form.with(|f| f.state().phone.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(FormField::Phone, event_target_value(&ev)))
                                }
                            />
                        </div>
                    </div>

                    <div class="field">
                        <label for="message">"Message"</label>
                        <textarea
                            id="message"
                            name=FormField::Message.name()
                            rows="4"
                            prop:value=move || form.with(|f| f.state().message.clone())
                            on:input=move |ev| {
                                form.update(|f| f.set_field(FormField::Message, event_target_value(&ev)))
                            }
                        ></textarea>
                    </div>

                    <label class="consent-check">
                        <input
                            type="checkbox"
                            name="consent"
                            required=true
                            prop:checked=move || form.with(|f| f.state().consent)
                            on:change=move |ev| form.update(|f| f.set_consent(event_target_checked(&ev)))
                        />
                        <span>
                            "I agree to the processing of my data according to the "
                            <a href="/privacy">"privacy policy"</a>
                            ". *"
                        </span>
                    </label>
                </fieldset>

                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        }
    };

    view! {
        <Show when=move || phase.get() != FormPhase::Success fallback=success_view>
            {form_view}
        </Show>
    }
}
