/// To-do panel

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::error::EditError;
use crate::todos::{Priority, TodoFilter, TodoList};
use crate::ui::components::{Button, ButtonVariant};

#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    Add(String, Priority),
    Toggle(u64),
    Remove(u64),
}

impl TodoAction {
    /// Apply to the list; Ok(true) when it changed and needs saving
    pub fn apply(self, list: &mut TodoList) -> Result<bool, EditError> {
        match self {
            TodoAction::Add(text, priority) => list.add(&text, priority).map(|_| true),
            TodoAction::Toggle(id) => Ok(list.toggle(id)),
            TodoAction::Remove(id) => Ok(list.remove(id)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TodoPanelProps {
    pub list: TodoList,
    pub on_action: Callback<TodoAction>,
}

#[function_component(TodoPanel)]
pub fn todo_panel(props: &TodoPanelProps) -> Html {
    let text = use_state(String::new);
    let priority = use_state(Priority::default);
    let filter = use_state(TodoFilter::default);

    let on_text = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                text.set(input.value());
            }
        })
    };

    let on_priority = {
        let priority = priority.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(value) = Priority::from_value(&select.value()) {
                    priority.set(value);
                }
            }
        })
    };

    let on_add = {
        let text = text.clone();
        let priority = priority.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(TodoAction::Add((*text).clone(), *priority));
            text.set(String::new());
        })
    };

    let filter_button = |value: TodoFilter, label: &'static str| {
        let filter = filter.clone();
        let variant = if *filter == value { ButtonVariant::Primary } else { ButtonVariant::Secondary };
        html! {
            <Button onclick={Callback::from(move |_: MouseEvent| filter.set(value))} variant={variant} small={true}>
                {label}
            </Button>
        }
    };

    let sorted = TodoList {
        todos: props.list.sorted_by_priority(),
    };
    let visible = sorted.filtered(*filter);

    html! {
        <div class="todo-panel">
            <div class="form-row">
                <input
                    type="text"
                    placeholder="What needs doing?"
                    value={(*text).clone()}
                    oninput={on_text}
                />
                <select onchange={on_priority}>
                    {for Priority::ALL.iter().map(|p| html! {
                        <option value={p.value()} selected={*priority == *p}>{p.label()}</option>
                    })}
                </select>
                <Button onclick={on_add} small={true}>{"Add"}</Button>
            </div>

            <div class="filter-row">
                {filter_button(TodoFilter::All, "All")}
                {filter_button(TodoFilter::Active, "Active")}
                {filter_button(TodoFilter::Completed, "Completed")}
            </div>

            <ul class="todo-list">
                {for visible.iter().map(|todo| {
                    let id = todo.id;
                    html! {
                        <li key={todo.id.to_string()} class={classes!("todo-item", todo.priority.css_class(), todo.completed.then_some("completed"))}>
                            <input
                                type="checkbox"
                                checked={todo.completed}
                                onclick={props.on_action.reform(move |_: MouseEvent| TodoAction::Toggle(id))}
                            />
                            <span class="todo-text">{&todo.text}</span>
                            <Button
                                onclick={props.on_action.reform(move |_: MouseEvent| TodoAction::Remove(id))}
                                variant={ButtonVariant::Ghost}
                                small={true}
                            >
                                {"✗"}
                            </Button>
                        </li>
                    }
                })}
            </ul>

            <div class="todo-footer">
                {format!("{} remaining", props.list.remaining())}
            </div>
        </div>
    }
}
