use super::view_model::PersonCreateViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_field_definition::aggregate::CustomFieldDefinition;
use contracts::enums::field_type::FieldType;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn PersonCreate() -> impl IntoView {
    let vm = PersonCreateViewModel::new();
    vm.load_definitions();

    // Rebuild the dynamic inputs only when the definitions change, not on every keystroke
    let definitions = Memo::new(move |_| vm.state.with(|s| s.definitions.clone()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    view! {
        <PageFrame page_id="a002_person--create" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h2>{icon("person")}"New Person"</h2>
            </div>

            <div class="page__content">
                {move || vm.state.with(|s| s.notice.clone()).map(|n| view! {
                    <div class="notice text-green-700">{n}</div>
                })}
                {move || vm.state.with(|s| s.error.clone()).map(|e| view! {
                    <div class="error text-red-700">{e}</div>
                })}

                <form class="details-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || vm.state.with(|s| s.name.clone())
                            on:input=move |ev| vm.state.update(|s| s.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || vm.state.with(|s| s.email.clone())
                            on:input=move |ev| vm.state.update(|s| s.email = event_target_value(&ev))
                        />
                    </div>

                    {move || definitions
                        .get()
                        .into_iter()
                        .map(|def| view! { <CustomFieldInput vm=vm def=def /> })
                        .collect_view()}

                    <div class="details-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || vm.state.with(|s| s.is_submitting)
                        >
                            {icon("save")}
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}

/// Input for one dynamic field, chosen by its type
#[component]
fn CustomFieldInput(vm: PersonCreateViewModel, def: CustomFieldDefinition) -> impl IntoView {
    let key = def.key_name.clone();
    let input_id = format!("custom-{}", def.key_name);
    let label = if def.is_required() {
        format!("{} *", def.label)
    } else {
        def.label.clone()
    };

    let input = match def.field_type {
        FieldType::Checkbox => {
            let k = key.clone();
            view! {
                <input
                    type="checkbox"
                    id=input_id.clone()
                    prop:checked=move || vm.state.with(|s| s.value(&key) == "true")
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        vm.state.update(|s| s.set_value(&k, checked.to_string()));
                    }
                />
            }
            .into_any()
        }
        FieldType::Multiselect => def
            .options
            .iter()
            .map(|option| {
                let (k1, k2) = (key.clone(), key.clone());
                let (o1, o2) = (option.clone(), option.clone());
                view! {
                    <label class="option">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.state.with(|s| s.is_option_checked(&k1, &o1))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.state.update(|s| s.toggle_option(&k2, &o2, checked));
                            }
                        />
                        {option.clone()}
                    </label>
                }
            })
            .collect_view()
            .into_any(),
        FieldType::Select | FieldType::Radio => {
            let (k1, k2) = (key.clone(), key.clone());
            view! {
                <select
                    id=input_id.clone()
                    prop:value=move || vm.state.with(|s| s.value(&k1))
                    on:change=move |ev| vm.state.update(|s| s.set_value(&k2, event_target_value(&ev)))
                >
                    <option value="">"—"</option>
                    {def.options.iter().map(|o| view! {
                        <option value=o.clone()>{o.clone()}</option>
                    }).collect_view()}
                </select>
            }
            .into_any()
        }
        other => {
            let input_type = match other {
                FieldType::Number => "number",
                FieldType::Date => "date",
                _ => "text",
            };
            let (k1, k2) = (key.clone(), key.clone());
            view! {
                <input
                    type=input_type
                    id=input_id.clone()
                    prop:value=move || vm.state.with(|s| s.value(&k1))
                    on:input=move |ev| vm.state.update(|s| s.set_value(&k2, event_target_value(&ev)))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group">
            <label for=input_id>{label}</label>
            {input}
        </div>
    }
}
