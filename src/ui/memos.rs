/// Memo panel

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::memos::{Memo, MemoBook};
use crate::ui::components::{Button, ButtonVariant};

#[derive(Debug, Clone, PartialEq)]
pub enum MemoAction {
    Save(Memo),
    Delete(u64),
}

impl MemoAction {
    /// Apply to the memo book; true when it changed and needs saving
    pub fn apply(self, book: &mut MemoBook) -> bool {
        match self {
            MemoAction::Save(memo) => {
                book.upsert(memo);
                true
            }
            MemoAction::Delete(id) => book.delete(id),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MemoPanelProps {
    pub book: MemoBook,
    pub on_action: Callback<MemoAction>,
}

#[function_component(MemoPanel)]
pub fn memo_panel(props: &MemoPanelProps) -> Html {
    // Memo being edited; id 0 means a new memo
    let draft = use_state(Memo::default);

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(Memo {
                    title: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_content = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                draft.set(Memo {
                    content: area.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_save = {
        let draft = draft.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            if draft.title.trim().is_empty() && draft.content.trim().is_empty() {
                return;
            }
            on_action.emit(MemoAction::Save((*draft).clone()));
            draft.set(Memo::default());
        })
    };

    let on_new = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.set(Memo::default()))
    };

    html! {
        <div class="memo-panel">
            <div class="memo-editor">
                <input
                    type="text"
                    placeholder="Title"
                    value={draft.title.clone()}
                    oninput={on_title}
                />
                <textarea
                    placeholder="Write something..."
                    value={draft.content.clone()}
                    oninput={on_content}
                />
                <div class="form-row">
                    <Button onclick={on_save} small={true}>
                        {if draft.id == 0 { "Save" } else { "Update" }}
                    </Button>
                    if draft.id != 0 {
                        <Button onclick={on_new} variant={ButtonVariant::Secondary} small={true}>{"New"}</Button>
                    }
                </div>
            </div>

            <ul class="memo-list">
                {for props.book.memos.iter().rev().map(|memo| {
                    let edit = {
                        let draft = draft.clone();
                        let memo = memo.clone();
                        Callback::from(move |_: MouseEvent| draft.set(memo.clone()))
                    };
                    let id = memo.id;

                    html! {
                        <li key={memo.id.to_string()} class="memo-item">
                            <div class="memo-title" onclick={edit}>
                                {if memo.title.is_empty() { "(untitled)" } else { memo.title.as_str() }}
                            </div>
                            <div class="memo-content">{&memo.content}</div>
                            <Button
                                onclick={props.on_action.reform(move |_: MouseEvent| MemoAction::Delete(id))}
                                variant={ButtonVariant::Ghost}
                                small={true}
                            >
                                {"✗"}
                            </Button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_actions() {
        let mut book = MemoBook::new();
        let memo = Memo {
            title: "Groceries".to_string(),
            content: "milk".to_string(),
            ..Memo::default()
        };

        assert!(MemoAction::Save(memo).apply(&mut book));
        assert_eq!(book.memos[0].id, 1);
        assert!(!MemoAction::Delete(5).apply(&mut book));
        assert!(MemoAction::Delete(1).apply(&mut book));
    }
}
