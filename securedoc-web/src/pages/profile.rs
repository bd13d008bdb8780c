//! Profile tab: editable details and photo upload.

use crate::api::SecureDocClient;
use crate::components::alert::{Alert, AlertKind};
use crate::components::loading::Loading;
use crate::validation::{ValidationError, validate_email, validate_name};
use js_sys::Uint8Array;
use shared::models::{UpdateUserRequest, User};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Default, Clone, PartialEq)]
struct ProfileForm {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    bio: String,
}

impl ProfileForm {
    fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
        }
    }

    fn to_request(&self) -> UpdateUserRequest {
        let optional = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        UpdateUserRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: optional(&self.phone),
            bio: optional(&self.bio),
        }
    }

    fn validate(&self) -> Option<ValidationError> {
        validate_name(&self.first_name)
            .and_then(|()| validate_name(&self.last_name))
            .and_then(|()| validate_email(&self.email))
            .err()
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let user = use_state(|| None::<Result<User, String>>);
    let form = use_state(ProfileForm::default);
    let outcome = use_state(|| None::<Result<String, String>>);
    let saving = use_state(|| false);

    {
        let user = user.clone();
        let form = form.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match SecureDocClient::shared().current_user().await {
                    Ok(loaded) => {
                        form.set(ProfileForm::from_user(&loaded));
                        user.set(Some(Ok(loaded)));
                    }
                    Err(err) => user.set(Some(Err(err.message().to_string()))),
                }
            });
        });
    }

    let onsubmit = {
        let form = form.clone();
        let user = user.clone();
        let outcome = outcome.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if let Some(err) = form.validate() {
                outcome.set(Some(Err(err.message().to_string())));
                return;
            }

            saving.set(true);
            outcome.set(None);
            let request = form.to_request();
            let user = user.clone();
            let form = form.clone();
            let outcome = outcome.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match SecureDocClient::shared().update_user(&request).await {
                    Ok(envelope) => {
                        if let Some(data) = envelope.data {
                            form.set(ProfileForm::from_user(&data.user));
                            user.set(Some(Ok(data.user)));
                        }
                        outcome.set(Some(Ok("Profile updated.".to_string())));
                    }
                    Err(err) => outcome.set(Some(Err(err.message().to_string()))),
                }
                saving.set(false);
            });
        })
    };

    let on_photo_change = {
        let user = user.clone();
        let outcome = outcome.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let user = user.clone();
            let outcome = outcome.clone();
            spawn_local(async move {
                let name = file.name();
                let Ok(buffer) = JsFuture::from(file.array_buffer()).await else {
                    outcome.set(Some(Err("Could not read the selected file".to_string())));
                    return;
                };
                let bytes = Uint8Array::new(&buffer).to_vec();

                match SecureDocClient::shared().update_photo(name, bytes).await {
                    Ok(_) => {
                        // Re-read so the new photo URL comes from the service.
                        match SecureDocClient::shared().current_user().await {
                            Ok(loaded) => {
                                user.set(Some(Ok(loaded)));
                                outcome.set(Some(Ok("Photo updated.".to_string())));
                            }
                            Err(err) => outcome.set(Some(Err(err.message().to_string()))),
                        }
                    }
                    Err(err) => outcome.set(Some(Err(err.message().to_string()))),
                }
            });
        })
    };

    let field = |id: &'static str, label: &'static str, value: String, update: Callback<String>| {
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                update.emit(input.value());
            }
        });
        html! {
            <div class="form-control">
                <label class="label" for={id}>
                    <span class="label-text">{label}</span>
                </label>
                <input {id} class="input input-bordered" type="text" {value} {oninput} />
            </div>
        }
    };

    let setter = |apply: fn(&mut ProfileForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let dismiss = {
        let outcome = outcome.clone();
        Callback::from(move |()| outcome.set(None))
    };
    let banner = match outcome.as_ref() {
        Some(Ok(message)) => html! {
            <Alert kind={AlertKind::Success} message={message.clone()} on_dismiss={dismiss} />
        },
        Some(Err(message)) => html! {
            <Alert kind={AlertKind::Error} message={message.clone()} on_dismiss={dismiss} />
        },
        None => html! {},
    };

    match user.as_ref() {
        None => html! { <Loading /> },
        Some(Err(message)) => html! {
            <Alert kind={AlertKind::Error} message={message.clone()} />
        },
        Some(Ok(loaded)) => html! {
            <section class="profile">
                <h1 class="text-2xl font-bold">{"Profile"}</h1>
                { banner }
                <div class="avatar my-4">
                    if let Some(url) = &loaded.image_url {
                        <img class="w-24 rounded-full" src={url.clone()} alt="Profile photo" />
                    }
                    <input type="file" accept="image/*" onchange={on_photo_change} />
                </div>
                <form onsubmit={onsubmit}>
                    { field("first-name", "First name", form.first_name.clone(),
                        setter(|form, value| form.first_name = value)) }
                    { field("last-name", "Last name", form.last_name.clone(),
                        setter(|form, value| form.last_name = value)) }
                    { field("email", "Email", form.email.clone(),
                        setter(|form, value| form.email = value)) }
                    { field("phone", "Phone", form.phone.clone(),
                        setter(|form, value| form.phone = value)) }
                    { field("bio", "Bio", form.bio.clone(),
                        setter(|form, value| form.bio = value)) }
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*saving}>
                            {if *saving { "Saving..." } else { "Save changes" }}
                        </button>
                    </div>
                </form>
            </section>
        },
    }
}
