use futures::try_join;
use shared::api::{ApiClient, ApiError, Resource};
use shared::models::{Fixture, NewTicket, Ticket, UserProfile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::inputs::{SelectField, SelectOption, TextField, field_setter};
use crate::components::loading::{Loading, PageError};
use crate::hooks::use_api;
use crate::models::remote::Remote;

const FETCH_ERROR: &str = "Error fetching data. Please make sure the server is running.";

#[derive(Debug, Clone, PartialEq)]
struct TicketsData {
    tickets: Vec<Ticket>,
    users: Vec<UserProfile>,
    fixtures: Vec<Fixture>,
}

impl TicketsData {
    /// Users the backend returned with an id; only those can be booked for.
    fn user_options(&self) -> Vec<SelectOption> {
        self.users
            .iter()
            .filter_map(|user| {
                let id = user.id.clone()?;
                Some(SelectOption::new(id, user.username.clone()))
            })
            .collect()
    }

    fn fixture_options(&self) -> Vec<SelectOption> {
        self.fixtures
            .iter()
            .map(|fixture| SelectOption::new(fixture.id.clone(), fixture.title()))
            .collect()
    }
}

async fn fetch(api: &ApiClient) -> Result<TicketsData, ApiError> {
    let (tickets, users, fixtures) =
        try_join!(api.list_tickets(), api.list_users(), api.list_fixtures())?;
    Ok(TicketsData {
        tickets,
        users,
        fixtures,
    })
}

async fn reload(api: &ApiClient, data: &UseStateHandle<Remote<TicketsData>>) {
    match fetch(api).await {
        Ok(loaded) => data.set(Remote::Ready(loaded)),
        Err(err) => {
            tracing::error!(error = %err, "failed to load tickets");
            data.set(Remote::Failed(FETCH_ERROR.into()));
        }
    }
}

#[function_component(TicketsPage)]
pub fn tickets_page() -> Html {
    let api = use_api();
    let data = use_state(Remote::<TicketsData>::default);
    let form = use_state(NewTicket::default);
    let form_error = use_state(|| None::<String>);

    {
        let api = api.clone();
        let data = data.clone();
        use_effect_with((), move |()| {
            spawn_local(async move { reload(&api, &data).await });
            || ()
        });
    }

    let onsubmit = {
        let api = api.clone();
        let data = data.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let ticket = (*form).clone();
            if let Err(err) = ticket.validate() {
                form_error.set(Some(err.to_string()));
                return;
            }
            form_error.set(None);

            let api = api.clone();
            let data = data.clone();
            let form = form.clone();
            spawn_local(async move {
                match api.add_ticket(&ticket).await {
                    Ok(()) => {
                        form.set(NewTicket::default());
                        reload(&api, &data).await;
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to add ticket");
                        data.set(Remote::Failed("Error adding ticket.".into()));
                    }
                }
            });
        })
    };

    let on_delete = {
        let data = data.clone();
        Callback::from(move |id: String| {
            let api = api.clone();
            let data = data.clone();
            spawn_local(async move {
                match api.delete(Resource::Tickets, &id).await {
                    Ok(()) => reload(&api, &data).await,
                    Err(err) => {
                        tracing::error!(%id, error = %err, "failed to delete ticket");
                        data.set(Remote::Failed("Error deleting ticket.".into()));
                    }
                }
            });
        })
    };

    let loaded = match &*data {
        Remote::Loading => return html! { <Loading message="Loading tickets..." /> },
        Remote::Failed(message) => return html! { <PageError message={message.clone()} /> },
        Remote::Ready(loaded) => loaded,
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <h2 class="text-3xl font-bold text-center mb-8">{ "Manage Tickets" }</h2>

            <div class="bg-white p-6 rounded-lg shadow-md mb-8 dark:bg-gray-800">
                <h3 class="text-2xl font-bold mb-4">{ "Add New Ticket" }</h3>
                if let Some(message) = &*form_error {
                    <p class="text-red-500 mb-4" role="alert">{ message.clone() }</p>
                }
                <form {onsubmit} class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <SelectField
                        name="user"
                        placeholder="Select User"
                        value={form.user.clone()}
                        options={loaded.user_options()}
                        on_change={field_setter(&form, |ticket, value| ticket.user = value)}
                    />
                    <SelectField
                        name="match"
                        placeholder="Select Match"
                        value={form.fixture.clone()}
                        options={loaded.fixture_options()}
                        on_change={field_setter(&form, |ticket, value| ticket.fixture = value)}
                    />
                    <TextField
                        name="seatNumber"
                        placeholder="Seat Number"
                        value={form.seat_number.clone()}
                        on_change={field_setter(&form, |ticket, value| ticket.seat_number = value)}
                    />
                    <button
                        type="submit"
                        class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded col-span-full"
                    >
                        { "Add Ticket" }
                    </button>
                </form>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for loaded.tickets.iter().map(|ticket| ticket_card(ticket, &on_delete)) }
            </div>
        </div>
    }
}

fn ticket_card(ticket: &Ticket, on_delete: &Callback<String>) -> Html {
    let onclick = on_delete.reform({
        let id = ticket.id.clone();
        move |_: MouseEvent| id.clone()
    });
    html! {
        <div
            key={ticket.id.clone()}
            class="bg-white rounded-lg shadow-lg overflow-hidden transform hover:scale-105 transition-transform duration-300 dark:bg-gray-800"
        >
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2 dark:text-gray-100">
                    { format!("Ticket for {}", ticket.fixture.title()) }
                </h3>
                <p class="text-gray-600 dark:text-gray-300">{ format!("User: {}", ticket.user.username) }</p>
                <p class="text-gray-500 dark:text-gray-400">{ format!("Seat: {}", ticket.seat_number) }</p>
                <p class="text-gray-500 dark:text-gray-400">{ format!("Status: {}", ticket.status) }</p>
                <div class="mt-4 flex justify-center">
                    <button {onclick} class="bg-red-500 hover:bg-red-700 text-white font-bold py-2 px-4 rounded">
                        { "Delete" }
                    </button>
                </div>
            </div>
        </div>
    }
}
