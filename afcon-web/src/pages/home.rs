use shared::models::{
    Fixture, PAST_WINNERS, PastWinner, TROPHY_IMAGE_URL, Team, finished, upcoming,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::{Loading, PageError};
use crate::hooks::use_api;
use crate::models::remote::Remote;

const FETCH_ERROR: &str =
    "Error fetching matches from local server. Please make sure the backend server is running.";

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let api = use_api();
    let fixtures = use_state(Remote::<Vec<Fixture>>::default);

    {
        let fixtures = fixtures.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match api.list_fixtures().await {
                    Ok(list) => fixtures.set(Remote::Ready(list)),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to load fixtures");
                        fixtures.set(Remote::Failed(FETCH_ERROR.into()));
                    }
                }
            });
            || ()
        });
    }

    let all = match &*fixtures {
        Remote::Loading => return html! { <Loading message="Loading matches..." /> },
        Remote::Failed(message) => return html! { <PageError message={message.clone()} /> },
        Remote::Ready(all) => all,
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <h2 class="text-3xl font-bold text-center my-8">{ "Upcoming Matches" }</h2>
            { fixture_grid(&upcoming(all), "No upcoming matches found.", Fixture::title) }

            <h2 class="text-3xl font-bold text-center my-8 mt-12">{ "Results" }</h2>
            { fixture_grid(&finished(all), "No finished matches found.", Fixture::result_label) }

            <h2 class="text-3xl font-bold text-center my-8 mt-12">{ "Last 5 Winners" }</h2>
            <div class="flex flex-wrap justify-center gap-4">
                <img
                    class="w-24 h-24 md:w-32 md:h-32 object-contain animate-spin-slow"
                    src={TROPHY_IMAGE_URL}
                    alt="Trophy"
                />
                { for PAST_WINNERS.iter().map(winner_card) }
            </div>
        </div>
    }
}

fn fixture_grid(fixtures: &[&Fixture], empty: &'static str, heading: fn(&Fixture) -> String) -> Html {
    if fixtures.is_empty() {
        return html! { <p class="text-center">{ empty }</p> };
    }
    html! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            { for fixtures.iter().map(|fixture| html! {
                <div
                    key={fixture.id.clone()}
                    class="bg-white rounded-lg shadow-lg overflow-hidden transform hover:scale-105 transition-transform duration-300 dark:bg-gray-800 dark:text-gray-100"
                >
                    <div class="p-6 flex items-center gap-4">
                        { team_logo(&fixture.team_a) }
                        <div>
                            <h3 class="text-xl font-bold">{ heading(fixture) }</h3>
                            <p class="text-gray-800 dark:text-gray-300">{ fixture.kickoff_label() }</p>
                            <p class="text-gray-700 dark:text-gray-400">{ fixture.venue.clone() }</p>
                        </div>
                        { team_logo(&fixture.team_b) }
                    </div>
                </div>
            }) }
        </div>
    }
}

fn team_logo(team: &Team) -> Html {
    if team.logo_url.is_empty() {
        return html! {};
    }
    html! { <img src={team.logo_url.clone()} alt={team.name.clone()} class="w-12 h-12" /> }
}

fn winner_card(winner: &PastWinner) -> Html {
    html! {
        <div class="p-4 text-center dark:text-gray-100 w-full sm:w-1/2 md:w-1/3 lg:w-1/5">
            <img src={winner.badge_url} alt={winner.winner} class="mx-auto mb-2" />
            <p class="font-bold">{ winner.year.to_string() }</p>
            <p>{ winner.winner }</p>
        </div>
    }
}
