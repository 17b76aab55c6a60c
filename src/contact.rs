#[cfg(target_arch = "wasm32")]
use crate::constants::CONTACT_ENDPOINT;
#[cfg(target_arch = "wasm32")]
use crate::events::ListenerHandle;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::{spawn_local, JsFuture};
#[cfg(target_arch = "wasm32")]
use web_sys as web;

/// Result of one form submission attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SubmitOutcome {
    Delivered,
    Rejected,
    NetworkFailed,
}

impl SubmitOutcome {
    /// User-facing acknowledgment for the status line.
    pub fn acknowledgment(self) -> &'static str {
        match self {
            SubmitOutcome::Delivered => "Message sent. Thanks, I'll reply soon.",
            SubmitOutcome::Rejected => "Something went wrong. Please try again.",
            SubmitOutcome::NetworkFailed => {
                "Network error. Please check your connection and try again."
            }
        }
    }

    /// Only a delivered message clears the fields; failures keep what the
    /// visitor typed.
    pub fn clears_form(self) -> bool {
        matches!(self, SubmitOutcome::Delivered)
    }
}

#[cfg(target_arch = "wasm32")]
async fn submit(data: web::FormData) -> SubmitOutcome {
    let window = match web::window() {
        Some(w) => w,
        None => return SubmitOutcome::NetworkFailed,
    };
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&data);
    let request = match web::Request::new_with_str_and_init(CONTACT_ENDPOINT, &init) {
        Ok(r) => r,
        Err(_) => return SubmitOutcome::NetworkFailed,
    };
    _ = request.headers().set("Accept", "application/json");
    let response = match JsFuture::from(window.fetch_with_request(&request)).await {
        Ok(v) => v,
        Err(_) => return SubmitOutcome::NetworkFailed,
    };
    match response.dyn_into::<web::Response>() {
        Ok(r) if r.ok() => SubmitOutcome::Delivered,
        Ok(_) => SubmitOutcome::Rejected,
        Err(_) => SubmitOutcome::NetworkFailed,
    }
}

/// Wire the contact form submit handler. The POST runs off the event loop;
/// the status element reports the outcome.
#[cfg(target_arch = "wasm32")]
pub fn wire_contact_form(document: &web::Document) -> Option<ListenerHandle> {
    let form = document
        .get_element_by_id("contact-form")?
        .dyn_into::<web::HtmlFormElement>()
        .ok()?;
    let status = document.get_element_by_id("contact-status")?;
    let form_for_handler = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let data = match web::FormData::new_with_form(&form_for_handler) {
            Ok(d) => d,
            Err(e) => {
                log::error!("[contact] form data unavailable: {:?}", e);
                return;
            }
        };
        let form = form_for_handler.clone();
        let status = status.clone();
        spawn_local(async move {
            let outcome = submit(data).await;
            status.set_text_content(Some(outcome.acknowledgment()));
            if outcome.clears_form() {
                form.reset();
            }
            log::info!("[contact] submission outcome: {:?}", outcome);
        });
    }) as Box<dyn FnMut(_)>);
    ListenerHandle::attach(form.as_ref(), "submit", closure)
}
