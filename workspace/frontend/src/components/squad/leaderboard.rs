use stash_common::format::euros;
use stash_common::squad::{leaderboard, share_message, WHATSAPP_SHARE_BASE};
use stash_common::SquadMember;
use yew::prelude::*;

use crate::components::widgets::Card;

fn whatsapp_link(members: &[SquadMember]) -> String {
    let text = String::from(js_sys::encode_uri_component(&share_message(members)));
    format!("{}{}", WHATSAPP_SHARE_BASE, text)
}

#[derive(Properties, PartialEq)]
pub struct LeaderboardProps {
    pub members: Vec<SquadMember>,
}

#[function_component(Leaderboard)]
pub fn deadbeat_leaderboard(props: &LeaderboardProps) -> Html {
    let entries = leaderboard(&props.members);

    html! {
        <Card hover={false}>
            <h3 class="text-sm font-semibold mb-3 flex items-center gap-2">
                <i class="fas fa-trophy text-warning"></i>{"Deadbeat Leaderboard"}
            </h3>
            { for entries.iter().map(|entry| html! {
                <div key={entry.member.id.clone()} class="flex items-center gap-3 py-2">
                    <span class="text-xl">{entry.medal}</span>
                    <div class="w-8 h-8 rounded-full bg-base-200 flex items-center justify-center text-xs font-bold">
                        {&entry.member.initials}
                    </div>
                    <span class="flex-1 text-sm">{&entry.member.name}</span>
                    <span class="text-sm font-bold">{euros(entry.member.amount)}</span>
                    <span class="text-xs opacity-50 hidden sm:inline">{entry.title}</span>
                </div>
            }) }
            <a
                class="btn btn-sm btn-ghost border-base-300 w-full mt-3"
                href={whatsapp_link(&props.members)}
                target="_blank"
                rel="noopener noreferrer"
            >
                <i class="fas fa-share-nodes"></i>{" Share to WhatsApp"}
            </a>
        </Card>
    }
}
