use super::view_model::FieldDefinitionAdminViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::domain::a003_field_definition::aggregate::ENTITY_PERSON;
use contracts::enums::field_type::FieldType;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn FieldDefinitionAdmin() -> impl IntoView {
    let vm = FieldDefinitionAdminViewModel::new(ENTITY_PERSON);
    vm.load_command();

    let definitions = Memo::new(move |_| vm.state.with(|s| s.definitions.clone()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    view! {
        <PageFrame page_id="a003_field_definition--admin" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2>{icon("fields")}"Custom Fields"</h2>
                <button class="btn btn-secondary" on:click=move |_| vm.load_command()>
                    {icon("refresh")}
                    "Refresh"
                </button>
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
                        <label for="key_name">"Key"</label>
                        <input
                            type="text"
                            id="key_name"
                            placeholder="e.g. fav_color"
                            prop:value=move || vm.state.with(|s| s.form.key_name.clone())
                            on:input=move |ev| vm.state.update(|s| s.form.key_name = event_target_value(&ev))
                        />
                        <Show when=move || vm.state.with(|s| s.is_duplicate_key())>
                            <div class="hint">"A field with this key already exists"</div>
                        </Show>
                    </div>

                    <div class="form-group">
                        <label for="label">"Label"</label>
                        <input
                            type="text"
                            id="label"
                            placeholder="e.g. Favorite Color"
                            prop:value=move || vm.state.with(|s| s.form.label.clone())
                            on:input=move |ev| vm.state.update(|s| s.form.label = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_type">"Type"</label>
                        <select
                            id="field_type"
                            prop:value=move || vm.state.with(|s| s.form.field_type.code())
                            on:change=move |ev| {
                                if let Some(t) = FieldType::from_code(&event_target_value(&ev)) {
                                    vm.state.update(|s| s.form.field_type = t);
                                }
                            }
                        >
                            {FieldType::all().into_iter().map(|t| view! {
                                <option value=t.code()>{t.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <Show when=move || vm.state.with(|s| s.form.field_type.has_options())>
                        <div class="form-group">
                            <label for="options">"Options (comma separated)"</label>
                            <input
                                type="text"
                                id="options"
                                placeholder="red, green, blue"
                                prop:value=move || vm.state.with(|s| s.form.options.clone())
                                on:input=move |ev| vm.state.update(|s| s.form.options = event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || vm.state.with(|s| s.form.required)
                                on:change=move |ev| vm.state.update(|s| s.form.required = event_target_checked(&ev))
                            />
                            "Required"
                        </label>
                    </div>

                    <div class="details-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || vm.state.with(|s| s.is_saving || !s.is_form_valid())
                        >
                            {icon("plus")}
                            "Create Field"
                        </button>
                    </div>
                </form>

                <table class="table">
                    <thead>
                        <tr>
                            <th>"Key"</th>
                            <th>"Label"</th>
                            <th>"Type"</th>
                            <th>"Options"</th>
                            <th>"Required"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || definitions.get().into_iter().map(|d| {
                            let required = if d.is_required() { "yes" } else { "" };
                            view! {
                                <tr>
                                    <td>{d.key_name}</td>
                                    <td>{d.label}</td>
                                    <td>{d.field_type.display_name()}</td>
                                    <td>{d.options.join(", ")}</td>
                                    <td>{required}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
