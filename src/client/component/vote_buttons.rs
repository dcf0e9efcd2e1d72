use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::model::{fact::FactDto, vote::VoteType};

#[cfg(feature = "web")]
use crate::client::api::fact::vote;

fn vote_icon(vote_type: VoteType) -> &'static str {
    match vote_type {
        VoteType::Interesting => "👍",
        VoteType::MindBlowing => "🤯",
        VoteType::False => "⛔️",
    }
}

fn vote_count(fact: &FactDto, vote_type: VoteType) -> i32 {
    match vote_type {
        VoteType::Interesting => fact.votes_interesting,
        VoteType::MindBlowing => fact.votes_mind_blowing,
        VoteType::False => fact.votes_false,
    }
}

/// Three vote buttons for a fact. Clicking the active vote retracts it, any
/// other switches to it; the server decides and `on_voted` gets its answer.
#[component]
pub fn VoteButtons(fact: FactDto, on_voted: EventHandler<FactDto>) -> Element {
    let fact_id = fact.id;
    let mut pending_vote = use_signal(|| None::<VoteType>);
    let mut error_message = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let vote_future = use_resource(move || async move {
        match pending_vote() {
            Some(vote_type) => Some(vote(fact_id, vote_type).await),
            None => None,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = vote_future.read_unchecked().as_ref() {
            match result {
                Ok(updated) => {
                    on_voted.call(updated.clone());
                    error_message.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to vote on fact {}: {}", fact_id, err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            pending_vote.set(None);
        }
    });

    let is_voting = pending_vote().is_some();

    rsx! {
        div {
            class: "flex items-center gap-2",
            for vote_type in VoteType::ALL {
                button {
                    key: "{vote_type}",
                    class: if fact.user_vote == Some(vote_type) {
                        "btn btn-sm btn-primary"
                    } else {
                        "btn btn-sm btn-ghost"
                    },
                    disabled: is_voting,
                    onclick: move |_| pending_vote.set(Some(vote_type)),
                    "{vote_icon(vote_type)} {vote_count(&fact, vote_type)}"
                }
            }
            if let Some(message) = error_message() {
                span { class: "text-error text-sm", "{message}" }
            }
        }
    }
}
