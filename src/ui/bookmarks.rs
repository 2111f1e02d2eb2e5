/// Bookmark sidebar: folders, bookmarks and drag-and-drop

use wasm_bindgen::JsCast;
use web_sys::{DataTransfer, Element, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::bookmark_data::Folder;
use crate::bookmark_store::BookmarkStore;
use crate::dnd::{is_self_drop, position_from_pointer, DragSource, DropPosition, DropTarget, ItemKind};
use crate::error::EditError;
use crate::ui::components::{Button, ButtonVariant};

/// User edits emitted by the sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum BookmarkAction {
    Drop(DragSource, DropTarget),
    AddFolder(String),
    AddBookmark {
        folder_id: Option<String>,
        title: String,
        url: String,
    },
    RemoveBookmark {
        folder_id: String,
        bookmark_id: String,
    },
    RemoveFolder(String),
    RenameFolder {
        folder_id: String,
        title: String,
    },
    ToggleFolder(String),
}

impl BookmarkAction {
    /// Apply to the store; Ok(true) when the folders changed and need saving
    pub fn apply(self, store: &mut BookmarkStore) -> Result<bool, EditError> {
        match self {
            BookmarkAction::Drop(source, target) => Ok(store.apply_drop(&source, &target)),
            BookmarkAction::AddFolder(title) => store.add_folder(&title).map(|_| true),
            BookmarkAction::AddBookmark { folder_id, title, url } => {
                store.add_bookmark(folder_id.as_deref(), &title, &url).map(|_| true)
            }
            BookmarkAction::RemoveBookmark { folder_id, bookmark_id } => {
                Ok(store.remove_bookmark(&folder_id, &bookmark_id))
            }
            BookmarkAction::RemoveFolder(folder_id) => Ok(store.remove_folder(&folder_id)),
            BookmarkAction::RenameFolder { folder_id, title } => store.rename_folder(&folder_id, &title).map(|_| true),
            BookmarkAction::ToggleFolder(folder_id) => Ok(store.toggle_folder(&folder_id)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BookmarkSidebarProps {
    pub folders: Vec<Folder>,
    pub on_action: Callback<BookmarkAction>,
    /// Search results are shown read-only
    #[prop_or(true)]
    pub editable: bool,
}

/// Drop target for the element under the pointer, unless it is the dragged item itself
fn drop_target_at(event: &DragEvent, source: &DragSource, kind: ItemKind, id: &str, folder_id: &str) -> Option<DropTarget> {
    let element = event.current_target()?.dyn_into::<Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    let position = position_from_pointer(kind, event.client_y() as f64 - rect.top(), rect.height());

    let target = match kind {
        ItemKind::Folder => DropTarget::folder(id, position),
        ItemKind::Bookmark => DropTarget::bookmark(id, folder_id, position),
    };

    if is_self_drop(source, &target) { None } else { Some(target) }
}

fn drop_class(drag_over: &Option<DropTarget>, kind: ItemKind, id: &str, folder_id: &str) -> &'static str {
    match drag_over {
        Some(target) if target.kind == kind && target.id == id && target.folder_id == folder_id => match target.position {
            DropPosition::Before => "drop-before",
            DropPosition::Inside => "drop-inside",
            DropPosition::After => "drop-after",
        },
        _ => "",
    }
}

/// Mark a drag as a move and attach the dragged id; false if the browser refused the data
pub fn begin_drag(transfer: &DataTransfer, source: &DragSource) -> bool {
    transfer.set_effect_allowed("move");
    // Firefox only starts a drag when data is set
    match transfer.set_data("text/plain", &source.id) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Could not attach drag data for {}: {:?}", source.id, e);
            false
        }
    }
}

#[function_component(BookmarkSidebar)]
pub fn bookmark_sidebar(props: &BookmarkSidebarProps) -> Html {
    let dragged = use_state(|| None::<DragSource>);
    let drag_over = use_state(|| None::<DropTarget>);
    let new_folder_title = use_state(String::new);
    let new_title = use_state(String::new);
    let new_url = use_state(String::new);
    let new_folder_choice = use_state(String::new);

    let reset_drag = {
        let dragged = dragged.clone();
        let drag_over = drag_over.clone();
        Callback::from(move |_: ()| {
            dragged.set(None);
            drag_over.set(None);
        })
    };

    let on_drag_start = {
        let dragged = dragged.clone();
        Callback::from(move |(event, source): (DragEvent, DragSource)| {
            if let Some(transfer) = event.data_transfer() {
                begin_drag(&transfer, &source);
            }
            dragged.set(Some(source));
        })
    };

    let on_drag_over = {
        let dragged = dragged.clone();
        let drag_over = drag_over.clone();
        Callback::from(move |(event, kind, id, folder_id): (DragEvent, ItemKind, String, String)| {
            let Some(source) = (*dragged).clone() else {
                return;
            };
            event.prevent_default();
            if let Some(transfer) = event.data_transfer() {
                transfer.set_drop_effect("move");
            }
            let target = drop_target_at(&event, &source, kind, &id, &folder_id);
            if *drag_over != target {
                drag_over.set(target);
            }
        })
    };

    let on_drop = {
        let dragged = dragged.clone();
        let reset_drag = reset_drag.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |(event, kind, id, folder_id): (DragEvent, ItemKind, String, String)| {
            event.prevent_default();
            if let Some(source) = (*dragged).clone() {
                if let Some(target) = drop_target_at(&event, &source, kind, &id, &folder_id) {
                    on_action.emit(BookmarkAction::Drop(source, target));
                }
            }
            reset_drag.emit(());
        })
    };

    let on_drag_leave = {
        let drag_over = drag_over.clone();
        Callback::from(move |_: DragEvent| {
            drag_over.set(None);
        })
    };

    let on_add_folder = {
        let new_folder_title = new_folder_title.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(BookmarkAction::AddFolder((*new_folder_title).clone()));
            new_folder_title.set(String::new());
        })
    };

    let on_add_bookmark = {
        let new_title = new_title.clone();
        let new_url = new_url.clone();
        let new_folder_choice = new_folder_choice.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            let folder_id = Some((*new_folder_choice).clone()).filter(|id| !id.is_empty());
            on_action.emit(BookmarkAction::AddBookmark {
                folder_id,
                title: (*new_title).clone(),
                url: (*new_url).clone(),
            });
            new_title.set(String::new());
            new_url.set(String::new());
        })
    };

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_folder_choice = {
        let new_folder_choice = new_folder_choice.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                new_folder_choice.set(select.value());
            }
        })
    };

    let editable = props.editable;

    html! {
        <div class="bookmark-sidebar">
            if editable {
                <div class="bookmark-forms">
                    <div class="form-row">
                        <input
                            type="text"
                            placeholder="New folder"
                            value={(*new_folder_title).clone()}
                            oninput={bind_input(&new_folder_title)}
                        />
                        <Button onclick={on_add_folder} small={true}>{"+ Folder"}</Button>
                    </div>
                    <div class="form-row">
                        <input
                            type="text"
                            placeholder="Title"
                            value={(*new_title).clone()}
                            oninput={bind_input(&new_title)}
                        />
                        <input
                            type="text"
                            placeholder="example.com"
                            value={(*new_url).clone()}
                            oninput={bind_input(&new_url)}
                        />
                        <select onchange={on_folder_choice}>
                            <option value="" selected={new_folder_choice.is_empty()}>{"Uncategorized"}</option>
                            {for props.folders.iter().filter(|f| !f.is_uncategorized()).map(|f| html! {
                                <option key={f.id.to_string()} value={f.id.to_string()} selected={f.id == *new_folder_choice}>
                                    {&f.title}
                                </option>
                            })}
                        </select>
                        <Button onclick={on_add_bookmark} small={true}>{"+ Bookmark"}</Button>
                    </div>
                </div>
            }

            if props.folders.is_empty() {
                <div class="empty-state">
                    <p>{"No bookmarks yet."}</p>
                </div>
            }

            {for props.folders.iter().map(|folder| {
                let folder_id = folder.id.to_string();
                let header_class = classes!(
                    "folder-header",
                    drop_class(&drag_over, ItemKind::Folder, &folder_id, &folder_id)
                );

                let header_drag_start = {
                    let folder_id = folder_id.clone();
                    on_drag_start.reform(move |e: DragEvent| (e, DragSource::folder(&folder_id)))
                };
                let header_drag_over = {
                    let folder_id = folder_id.clone();
                    on_drag_over.reform(move |e: DragEvent| (e, ItemKind::Folder, folder_id.clone(), folder_id.clone()))
                };
                let header_drop = {
                    let folder_id = folder_id.clone();
                    on_drop.reform(move |e: DragEvent| (e, ItemKind::Folder, folder_id.clone(), folder_id.clone()))
                };
                let toggle = {
                    let folder_id = folder_id.clone();
                    props.on_action.reform(move |_: MouseEvent| BookmarkAction::ToggleFolder(folder_id.clone()))
                };
                let rename = {
                    let folder_id = folder_id.clone();
                    let current = folder.title.clone();
                    let on_action = props.on_action.clone();
                    Callback::from(move |_: MouseEvent| {
                        let answer = web_sys::window()
                            .and_then(|w| w.prompt_with_message_and_default("Folder name", &current).ok())
                            .flatten();
                        if let Some(title) = answer {
                            on_action.emit(BookmarkAction::RenameFolder {
                                folder_id: folder_id.clone(),
                                title,
                            });
                        }
                    })
                };
                let remove_folder = {
                    let folder_id = folder_id.clone();
                    props.on_action.reform(move |_: MouseEvent| BookmarkAction::RemoveFolder(folder_id.clone()))
                };

                html! {
                    <div key={folder_id.clone()} class="folder">
                        <div
                            class={header_class}
                            draggable={if editable { "true" } else { "false" }}
                            ondragstart={header_drag_start}
                            ondragover={header_drag_over}
                            ondragleave={on_drag_leave.clone()}
                            ondrop={header_drop}
                            ondragend={reset_drag.reform(|_: DragEvent| ())}
                        >
                            <span class="folder-toggle" onclick={toggle}>
                                {if folder.expanded { "▾ " } else { "▸ " }}
                                {&folder.title}
                            </span>
                            <span class="folder-count">{format!("({})", folder.bookmarks.len())}</span>
                            if editable && !folder.is_uncategorized() {
                                <Button onclick={rename} variant={ButtonVariant::Ghost} small={true} title={AttrValue::from("Rename folder")}>
                                    {"✎"}
                                </Button>
                                <Button onclick={remove_folder} variant={ButtonVariant::Ghost} small={true} title={AttrValue::from("Delete folder")}>
                                    {"✗"}
                                </Button>
                            }
                        </div>

                        if folder.expanded {
                            <ul class="bookmark-list">
                                {for folder.bookmarks.iter().map(|bookmark| {
                                    let bookmark_id = bookmark.id.to_string();
                                    let row_class = classes!(
                                        "bookmark-item",
                                        drop_class(&drag_over, ItemKind::Bookmark, &bookmark_id, &folder_id)
                                    );

                                    let row_drag_start = {
                                        let source = DragSource::bookmark(&bookmark_id, &folder_id);
                                        on_drag_start.reform(move |e: DragEvent| (e, source.clone()))
                                    };
                                    let row_drag_over = {
                                        let (id, folder_id) = (bookmark_id.clone(), folder_id.clone());
                                        on_drag_over.reform(move |e: DragEvent| (e, ItemKind::Bookmark, id.clone(), folder_id.clone()))
                                    };
                                    let row_drop = {
                                        let (id, folder_id) = (bookmark_id.clone(), folder_id.clone());
                                        on_drop.reform(move |e: DragEvent| (e, ItemKind::Bookmark, id.clone(), folder_id.clone()))
                                    };
                                    let remove_bookmark = {
                                        let (bookmark_id, folder_id) = (bookmark_id.clone(), folder_id.clone());
                                        props.on_action.reform(move |_: MouseEvent| BookmarkAction::RemoveBookmark {
                                            folder_id: folder_id.clone(),
                                            bookmark_id: bookmark_id.clone(),
                                        })
                                    };

                                    html! {
                                        <li
                                            key={bookmark_id.clone()}
                                            class={row_class}
                                            draggable={if editable { "true" } else { "false" }}
                                            ondragstart={row_drag_start}
                                            ondragover={row_drag_over}
                                            ondragleave={on_drag_leave.clone()}
                                            ondrop={row_drop}
                                            ondragend={reset_drag.reform(|_: DragEvent| ())}
                                        >
                                            if !bookmark.favicon_url.is_empty() {
                                                <img class="favicon" src={bookmark.favicon_url.clone()} alt="" />
                                            }
                                            <a href={bookmark.url.clone()} title={bookmark.url.clone()}>{&bookmark.title}</a>
                                            if editable {
                                                <Button onclick={remove_bookmark} variant={ButtonVariant::Ghost} small={true} title={AttrValue::from("Delete bookmark")}>
                                                    {"✗"}
                                                </Button>
                                            }
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    </div>
                }
            })}
        </div>
    }
}
