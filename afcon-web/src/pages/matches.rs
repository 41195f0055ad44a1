use futures::try_join;
use shared::api::{ApiClient, ApiError, Resource};
use shared::models::{Fixture, NewFixture, Team};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::inputs::{SelectField, SelectOption, TextField, field_setter};
use crate::components::loading::{Loading, PageError};
use crate::hooks::use_api;
use crate::models::remote::Remote;

const FETCH_ERROR: &str = "Error fetching data. Please make sure the server is running.";

#[derive(Debug, Clone, PartialEq)]
struct MatchesData {
    fixtures: Vec<Fixture>,
    teams: Vec<Team>,
}

type DataHandle = UseStateHandle<Remote<MatchesData>>;

async fn fetch(api: &ApiClient) -> Result<MatchesData, ApiError> {
    let (fixtures, teams) = try_join!(api.list_fixtures(), api.list_teams())?;
    Ok(MatchesData { fixtures, teams })
}

async fn reload(api: &ApiClient, data: &DataHandle) {
    match fetch(api).await {
        Ok(loaded) => data.set(Remote::Ready(loaded)),
        Err(err) => {
            tracing::error!(error = %err, "failed to load matches");
            data.set(Remote::Failed(FETCH_ERROR.into()));
        }
    }
}

#[function_component(MatchesPage)]
pub fn matches_page() -> Html {
    let api = use_api();
    let data = use_state(Remote::<MatchesData>::default);
    let form = use_state(NewFixture::default);
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
            let fixture = (*form).clone();
            if let Err(err) = fixture.validate() {
                form_error.set(Some(err.to_string()));
                return;
            }
            form_error.set(None);

            let api = api.clone();
            let data = data.clone();
            let form = form.clone();
            spawn_local(async move {
                match api.add_fixture(&fixture).await {
                    Ok(()) => {
                        form.set(NewFixture::default());
                        reload(&api, &data).await;
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to add match");
                        data.set(Remote::Failed("Error adding match.".into()));
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
                match api.delete(Resource::Matches, &id).await {
                    Ok(()) => reload(&api, &data).await,
                    Err(err) => {
                        tracing::error!(%id, error = %err, "failed to delete match");
                        data.set(Remote::Failed("Error deleting match.".into()));
                    }
                }
            });
        })
    };

    let loaded = match &*data {
        Remote::Loading => return html! { <Loading message="Loading matches..." /> },
        Remote::Failed(message) => return html! { <PageError message={message.clone()} /> },
        Remote::Ready(loaded) => loaded,
    };

    let team_options: Vec<SelectOption> = loaded
        .teams
        .iter()
        .map(|team| SelectOption::new(team.id.clone(), team.name.clone()))
        .collect();

    html! {
        <div class="container mx-auto px-4 py-8">
            <h2 class="text-3xl font-bold text-center mb-8">{ "Manage Matches" }</h2>

            <div class="bg-white p-6 rounded-lg shadow-md mb-8 dark:bg-gray-800">
                <h3 class="text-2xl font-bold mb-4">{ "Add New Match" }</h3>
                if let Some(message) = &*form_error {
                    <p class="text-red-500 mb-4" role="alert">{ message.clone() }</p>
                }
                <form {onsubmit} class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    <SelectField
                        name="teamA"
                        placeholder="Select Team A"
                        value={form.team_a.clone()}
                        options={team_options.clone()}
                        on_change={field_setter(&form, |fixture, value| fixture.team_a = value)}
                    />
                    <SelectField
                        name="teamB"
                        placeholder="Select Team B"
                        value={form.team_b.clone()}
                        options={team_options}
                        on_change={field_setter(&form, |fixture, value| fixture.team_b = value)}
                    />
                    <TextField
                        name="date"
                        input_type="datetime-local"
                        value={form.date.clone()}
                        on_change={field_setter(&form, |fixture, value| fixture.date = value)}
                    />
                    <TextField
                        name="venue"
                        placeholder="Venue"
                        value={form.venue.clone()}
                        on_change={field_setter(&form, |fixture, value| fixture.venue = value)}
                    />
                    <button
                        type="submit"
                        class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded col-span-full"
                    >
                        { "Add Match" }
                    </button>
                </form>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for loaded.fixtures.iter().map(|fixture| fixture_card(fixture, &on_delete)) }
            </div>
        </div>
    }
}

fn fixture_card(fixture: &Fixture, on_delete: &Callback<String>) -> Html {
    let onclick = on_delete.reform({
        let id = fixture.id.clone();
        move |_: MouseEvent| id.clone()
    });
    html! {
        <div
            key={fixture.id.clone()}
            class="bg-white rounded-lg shadow-lg overflow-hidden transform hover:scale-105 transition-transform duration-300 dark:bg-gray-800"
        >
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2 dark:text-gray-100">{ fixture.title() }</h3>
                <p class="text-gray-600 dark:text-gray-300">{ fixture.kickoff_label() }</p>
                <p class="text-gray-500 dark:text-gray-400">{ fixture.venue.clone() }</p>
                <div class="mt-4 flex justify-center">
                    <button {onclick} class="bg-red-500 hover:bg-red-700 text-white font-bold py-2 px-4 rounded">
                        { "Delete" }
                    </button>
                </div>
            </div>
        </div>
    }
}
