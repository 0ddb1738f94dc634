use super::view_model::{Notice, WaitingListViewModel};
use contracts::domain::tickets;
use contracts::domain::waiting_list::SignupField;
use leptos::prelude::*;

/// "Join Waiting List" button plus the modal signup dialog it opens.
///
/// `ticket_title` pre-selects a ticket when the dialog is opened from a
/// specific ticket card.
#[component]
pub fn WaitingListDialog(#[prop(optional, into)] ticket_title: Option<String>) -> impl IntoView {
    let vm = WaitingListViewModel::new(ticket_title);
    let ticket_options: Vec<String> = tickets::catalog()
        .into_iter()
        .map(|card| card.title)
        .collect();

    let vm_clone = vm.clone();

    view! {
        <div class="waiting-list">
            <button
                class="btn btn-dark waiting-list-trigger"
                on:click={
                    let vm = vm_clone.clone();
                    move |_| vm.open_dialog()
                }
            >
                "Join Waiting List"
            </button>

            {
                let vm = vm_clone.clone();
                move || (vm.notice.get() == Some(Notice::Success) && !vm.open.get()).then(|| view! {
                    <div class="notice notice-success">"Successfully added to waiting list!"</div>
                })
            }

            <Show when={
                let vm = vm_clone.clone();
                move || vm.open.get()
            }>
                <div class="dialog-overlay">
                    <div class="dialog waiting-list-dialog">
                        <div class="dialog-header">
                            <h3>"Join Waiting List"</h3>
                            <p class="dialog-description">
                                "Enter your details below and we'll notify you when tickets are available."
                            </p>
                        </div>

                        {
                            let vm = vm_clone.clone();
                            move || (vm.notice.get() == Some(Notice::Failure)).then(|| view! {
                                <div class="notice notice-failure">"Failed to submit form. Please try again."</div>
                            })
                        }

                        <div class="dialog-form">
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="first-name">"First Name"</label>
                                    <input
                                        type="text"
                                        id="first-name"
                                        prop:value={
                                            let vm = vm_clone.clone();
                                            move || vm.form.get().first_name
                                        }
                                        on:input={
                                            let vm = vm_clone.clone();
                                            move |ev| vm.set_field(SignupField::FirstName, event_target_value(&ev))
                                        }
                                        disabled={
                                            let vm = vm_clone.clone();
                                            move || vm.submitting.get()
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="last-name">"Last Name"</label>
                                    <input
                                        type="text"
                                        id="last-name"
                                        prop:value={
                                            let vm = vm_clone.clone();
                                            move || vm.form.get().last_name
                                        }
                                        on:input={
                                            let vm = vm_clone.clone();
                                            move |ev| vm.set_field(SignupField::LastName, event_target_value(&ev))
                                        }
                                        disabled={
                                            let vm = vm_clone.clone();
                                            move || vm.submitting.get()
                                        }
                                    />
                                </div>
                            </div>

                            <div class="form-group">
                                <label for="email">"Email"</label>
                                <input
                                    type="email"
                                    id="email"
                                    prop:value={
                                        let vm = vm_clone.clone();
                                        move || vm.form.get().email
                                    }
                                    on:input={
                                        let vm = vm_clone.clone();
                                        move |ev| vm.set_field(SignupField::Email, event_target_value(&ev))
                                    }
                                    disabled={
                                        let vm = vm_clone.clone();
                                        move || vm.submitting.get()
                                    }
                                />
                            </div>

                            <div class="form-group">
                                <label for="phone-number">"Phone Number"</label>
                                <input
                                    type="tel"
                                    id="phone-number"
                                    prop:value={
                                        let vm = vm_clone.clone();
                                        move || vm.form.get().phone_number
                                    }
                                    on:input={
                                        let vm = vm_clone.clone();
                                        move |ev| vm.set_field(SignupField::PhoneNumber, event_target_value(&ev))
                                    }
                                    disabled={
                                        let vm = vm_clone.clone();
                                        move || vm.submitting.get()
                                    }
                                />
                            </div>

                            <div class="form-group">
                                <label for="ticket">"Ticket Interested In"</label>
                                <select
                                    id="ticket"
                                    prop:value={
                                        let vm = vm_clone.clone();
                                        move || vm.form.get().ticket
                                    }
                                    on:change={
                                        let vm = vm_clone.clone();
                                        move |ev| vm.set_field(SignupField::Ticket, event_target_value(&ev))
                                    }
                                    disabled={
                                        let vm = vm_clone.clone();
                                        move || vm.submitting.get()
                                    }
                                >
                                    <option value="">"Select a ticket"</option>
                                    {ticket_options
                                        .iter()
                                        .map(|title| view! {
                                            <option value=title.clone()>{title.clone()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="dialog-actions">
                            <button
                                class="btn btn-secondary"
                                on:click={
                                    let vm = vm_clone.clone();
                                    move |_| vm.close_dialog()
                                }
                                disabled={
                                    let vm = vm_clone.clone();
                                    move || vm.submitting.get()
                                }
                            >
                                "Cancel"
                            </button>
                            <button
                                class="btn btn-primary"
                                on:click={
                                    let vm = vm_clone.clone();
                                    move |_| vm.submit_command()
                                }
                                disabled={
                                    let vm = vm_clone.clone();
                                    move || vm.submitting.get() || !vm.is_form_valid()()
                                }
                            >
                                {
                                    let vm = vm_clone.clone();
                                    move || if vm.submitting.get() { "Submitting..." } else { "Submit" }
                                }
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
