use yew::prelude::*;

use super::bottom_nav::BottomNav;
use super::sidebar::Sidebar;
use super::top_bar::TopBar;
use crate::components::widgets::FloatingChat;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex h-screen w-screen bg-base-200 overflow-hidden transition-colors duration-300">
            <Sidebar />
            <div class="flex-1 flex flex-col min-w-0 relative">
                <TopBar title={props.title.clone()} />
                <main class="relative flex-1 overflow-y-auto pb-24 md:pb-6 px-4 md:px-8 lg:px-10 py-6">
                    { for props.children.iter() }
                </main>
            </div>
            <BottomNav />
            <FloatingChat />
        </div>
    }
}
