/// New tab page: bookmarks, to-dos and memos

use patternfly_yew::prelude::{Alert, AlertType};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::bookmark_store::BookmarkStore;
use crate::memos::MemoBook;
use crate::storage::{load_folders, load_memos, load_todos, save_folders, save_memos, save_todos};
use crate::todos::TodoList;
use crate::ui::bookmarks::{BookmarkAction, BookmarkSidebar};
use crate::ui::bridge::ChromeStorage;
use crate::ui::components::{Panel, Spinner};
use crate::ui::memos::{MemoAction, MemoPanel};
use crate::ui::todos::{TodoAction, TodoPanel};

#[derive(Clone, PartialEq)]
enum ViewState {
    Loading,
    Idle,
    Error(String),
}

#[function_component(NewTab)]
pub fn new_tab() -> Html {
    let state = use_state(|| ViewState::Loading);
    let bookmarks = use_state(BookmarkStore::new);
    let todos = use_state(TodoList::new);
    let memos = use_state(MemoBook::new);
    let search_query = use_state(String::new);

    // Load storage on mount
    {
        let state = state.clone();
        let bookmarks = bookmarks.clone();
        let todos = todos.clone();
        let memos = memos.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let storage = ChromeStorage;
                bookmarks.set(BookmarkStore::from_folders(load_folders(&storage).await));
                todos.set(load_todos(&storage).await);
                memos.set(load_memos(&storage).await);
                state.set(ViewState::Idle);
            });
            || ()
        });
    }

    // Edits update state first, then save in the background
    let on_bookmark_action = {
        let bookmarks = bookmarks.clone();
        let state = state.clone();

        Callback::from(move |action: BookmarkAction| {
            let mut next = (*bookmarks).clone();
            match action.apply(&mut next) {
                Ok(true) => {
                    bookmarks.set(next.clone());
                    state.set(ViewState::Idle);
                    spawn_local(async move {
                        if !save_folders(&ChromeStorage, next.folders()).await {
                            log::warn!("Bookmarks kept in memory only; save failed");
                        }
                    });
                }
                Ok(false) => {}
                Err(e) => state.set(ViewState::Error(e.to_string())),
            }
        })
    };

    let on_todo_action = {
        let todos = todos.clone();
        let state = state.clone();

        Callback::from(move |action: TodoAction| {
            let mut next = (*todos).clone();
            match action.apply(&mut next) {
                Ok(true) => {
                    todos.set(next.clone());
                    state.set(ViewState::Idle);
                    spawn_local(async move {
                        if !save_todos(&ChromeStorage, &next).await {
                            log::warn!("To-dos kept in memory only; save failed");
                        }
                    });
                }
                Ok(false) => {}
                Err(e) => state.set(ViewState::Error(e.to_string())),
            }
        })
    };

    let on_memo_action = {
        let memos = memos.clone();

        Callback::from(move |action: MemoAction| {
            let mut next = (*memos).clone();
            if action.apply(&mut next) {
                memos.set(next.clone());
                spawn_local(async move {
                    if !save_memos(&ChromeStorage, &next).await {
                        log::warn!("Memos kept in memory only; save failed");
                    }
                });
            }
        })
    };

    // Search handler
    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search_query.set(input.value());
            }
        })
    };

    let searching = !search_query.trim().is_empty();
    let shown_folders = if searching {
        bookmarks.search(&search_query)
    } else {
        bookmarks.folders().to_vec()
    };
    let bookmark_count: usize = bookmarks.folders().iter().map(|f| f.bookmarks.len()).sum();

    html! {
        <div class="container">
            <div class="header">
                <h1 class="main-title">{"New Tab"}</h1>
                <input
                    type="text"
                    placeholder="Search bookmarks..."
                    value={(*search_query).clone()}
                    oninput={on_search_input}
                    class="search-input"
                />
            </div>

            // Status display
            {match &*state {
                ViewState::Loading => html! {
                    <Spinner message={Some("Loading...".to_string())} />
                },
                ViewState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                ViewState::Idle => html! {}
            }}

            <div class="dashboard">
                <Panel
                    title="Bookmarks"
                    footer={AttrValue::from(format!("{} folders • {} bookmarks", bookmarks.folders().len(), bookmark_count))}
                >
                    if searching && shown_folders.is_empty() {
                        <p class="empty-state">{"No bookmarks match your search."}</p>
                    } else {
                        <BookmarkSidebar
                            folders={shown_folders}
                            on_action={on_bookmark_action}
                            editable={!searching}
                        />
                    }
                </Panel>

                <Panel title="To-do">
                    <TodoPanel list={(*todos).clone()} on_action={on_todo_action} />
                </Panel>

                <Panel title="Memos">
                    <MemoPanel book={(*memos).clone()} on_action={on_memo_action} />
                </Panel>
            </div>
        </div>
    }
}
