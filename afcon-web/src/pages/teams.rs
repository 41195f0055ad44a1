use shared::api::{ApiClient, Resource};
use shared::models::{NewTeam, Team};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::inputs::{TextField, field_setter};
use crate::components::loading::{Loading, PageError};
use crate::hooks::use_api;
use crate::models::remote::Remote;

const FETCH_ERROR: &str = "Error fetching teams. Please make sure the server is running.";

type TeamsHandle = UseStateHandle<Remote<Vec<Team>>>;

async fn reload(api: &ApiClient, teams: &TeamsHandle) {
    match api.list_teams().await {
        Ok(list) => teams.set(Remote::Ready(list)),
        Err(err) => {
            tracing::error!(error = %err, "failed to load teams");
            teams.set(Remote::Failed(FETCH_ERROR.into()));
        }
    }
}

#[function_component(TeamsPage)]
pub fn teams_page() -> Html {
    let api = use_api();
    let teams = use_state(Remote::<Vec<Team>>::default);
    let form = use_state(NewTeam::default);
    let form_error = use_state(|| None::<String>);

    {
        let api = api.clone();
        let teams = teams.clone();
        use_effect_with((), move |()| {
            spawn_local(async move { reload(&api, &teams).await });
            || ()
        });
    }

    let onsubmit = {
        let api = api.clone();
        let teams = teams.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let team = (*form).clone();
            if let Err(err) = team.validate() {
                form_error.set(Some(err.to_string()));
                return;
            }
            form_error.set(None);

            let api = api.clone();
            let teams = teams.clone();
            let form = form.clone();
            spawn_local(async move {
                match api.add_team(&team).await {
                    Ok(()) => {
                        form.set(NewTeam::default());
                        reload(&api, &teams).await;
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to add team");
                        teams.set(Remote::Failed("Error adding team.".into()));
                    }
                }
            });
        })
    };

    let on_delete = {
        let teams = teams.clone();
        Callback::from(move |id: String| {
            let api = api.clone();
            let teams = teams.clone();
            spawn_local(async move {
                match api.delete(Resource::Teams, &id).await {
                    Ok(()) => reload(&api, &teams).await,
                    Err(err) => {
                        tracing::error!(%id, error = %err, "failed to delete team");
                        teams.set(Remote::Failed("Error deleting team.".into()));
                    }
                }
            });
        })
    };

    let list = match &*teams {
        Remote::Loading => return html! { <Loading message="Loading teams..." /> },
        Remote::Failed(message) => return html! { <PageError message={message.clone()} /> },
        Remote::Ready(list) => list,
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <h2 class="text-3xl font-bold text-center mb-8">{ "Manage Teams" }</h2>

            <div class="bg-white p-6 rounded-lg shadow-md mb-8 dark:bg-gray-800">
                <h3 class="text-2xl font-bold mb-4">{ "Add New Team" }</h3>
                if let Some(message) = &*form_error {
                    <p class="text-red-500 mb-4" role="alert">{ message.clone() }</p>
                }
                <form {onsubmit} class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <TextField
                        name="name"
                        placeholder="Team Name"
                        value={form.name.clone()}
                        on_change={field_setter(&form, |team, value| team.name = value)}
                    />
                    <TextField
                        name="country"
                        placeholder="Country"
                        value={form.country.clone()}
                        on_change={field_setter(&form, |team, value| team.country = value)}
                    />
                    <TextField
                        name="logoUrl"
                        placeholder="Logo URL"
                        input_type="url"
                        value={form.logo_url.clone()}
                        on_change={field_setter(&form, |team, value| team.logo_url = value)}
                    />
                    <button
                        type="submit"
                        class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded col-span-full"
                    >
                        { "Add Team" }
                    </button>
                </form>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for list.iter().map(|team| team_card(team, &on_delete)) }
            </div>
        </div>
    }
}

fn team_card(team: &Team, on_delete: &Callback<String>) -> Html {
    let onclick = on_delete.reform({
        let id = team.id.clone();
        move |_: MouseEvent| id.clone()
    });
    html! {
        <div
            key={team.id.clone()}
            class="bg-white rounded-lg shadow-lg overflow-hidden transform hover:scale-105 transition-transform duration-300 dark:bg-gray-800"
        >
            <div class="p-6">
                <img src={team.logo_url.clone()} alt={team.name.clone()} class="w-24 h-24 mx-auto mb-4" />
                <h3 class="text-xl font-bold mb-2 text-center dark:text-gray-100">{ team.name.clone() }</h3>
                <p class="text-gray-600 text-center dark:text-gray-300">{ team.country.clone() }</p>
                <div class="mt-4 flex justify-center">
                    <button {onclick} class="bg-red-500 hover:bg-red-700 text-white font-bold py-2 px-4 rounded">
                        { "Delete" }
                    </button>
                </div>
            </div>
        </div>
    }
}
