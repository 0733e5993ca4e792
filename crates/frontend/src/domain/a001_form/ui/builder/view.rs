use super::view_model::FormBuilderViewModel;
use crate::domain::a001_form::draft::SectionDraft;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::enums::field_type::FieldType;
use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::logging::log;
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn FormBuilder() -> impl IntoView {
    let vm = FormBuilderViewModel::new();
    vm.load_templates();

    log!("FormBuilder mounted with an empty draft");
    on_cleanup(|| log!("FormBuilder unmounted, draft discarded"));

    let templates = Memo::new(move |_| vm.state.with(|s| s.templates.clone()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    let on_section_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            vm.add_section();
        }
    };

    view! {
        <PageFrame page_id="a001_form--builder" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h2>{icon("form")}"Form Builder"</h2>
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
                        <label for="form-name">"Form Name"</label>
                        <input
                            type="text"
                            id="form-name"
                            placeholder="e.g. Employee Onboarding"
                            prop:value=move || vm.state.with(|s| s.draft.name.clone())
                            on:input=move |ev| vm.set_name(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="form-description">"Description"</label>
                        <textarea
                            id="form-description"
                            rows="2"
                            placeholder="Optional"
                            prop:value=move || vm.state.with(|s| s.draft.description.clone())
                            on:input=move |ev| vm.set_description(event_target_value(&ev))
                        />
                    </div>

                    <div class="builder-sections">
                        <h3>"Sections"</h3>

                        <div class="builder-add-section">
                            <input
                                type="text"
                                placeholder="New Section Name"
                                prop:value=move || vm.state.with(|s| s.new_section_name.clone())
                                on:input=move |ev| vm.set_new_section_name(event_target_value(&ev))
                                on:keydown=on_section_keydown
                            />
                            <button
                                type="button"
                                class="btn bg-blue-600"
                                on:click=move |_| vm.add_section()
                            >
                                {icon("plus")}
                                "Add Section"
                            </button>
                        </div>
                        {move || vm.state.with(|s| s.section_hint.clone()).map(|h| view! {
                            <div class="hint text-red-700">{h}</div>
                        })}

                        <Show when=move || vm.state.with(|s| s.draft.section_count() == 0)>
                            <p class="empty">"No sections yet."</p>
                        </Show>

                        <For
                            each=move || vm.state.with(|s| s.draft.sections().to_vec())
                            key=|section: &SectionDraft| section.key
                            children=move |section: SectionDraft| {
                                view! { <SectionEditor vm=vm section_key=section.key name=section.name /> }
                            }
                        />
                    </div>

                    <div class="details-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || vm.state.with(|s| s.is_submitting)
                        >
                            {icon("save")}
                            {move || if vm.state.with(|s| s.is_submitting) { "Saving..." } else { "Create Form" }}
                        </button>
                    </div>
                </form>

                <div class="builder-templates">
                    <h3>"Existing Forms"</h3>
                    {move || {
                        let templates = templates.get();
                        if templates.is_empty() {
                            view! { <p class="empty">"No forms yet."</p> }.into_any()
                        } else {
                            view! {
                                <ul>
                                    {templates.into_iter().map(|t| view! {
                                        <li>
                                            <span class="template-name">{t.name}</span>
                                            <span class="template-id">{format!("#{}", t.id)}</span>
                                            {t.description.map(|d| view! { <span class="template-description">{d}</span> })}
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

/// One draft section with its fields and the "add field" row
#[component]
fn SectionEditor(vm: FormBuilderViewModel, section_key: Uuid, name: String) -> impl IntoView {
    let label = RwSignal::new(String::new());
    let field_type = RwSignal::new(FieldType::Text);
    let hint = RwSignal::new(None::<String>);

    let fields = Memo::new(move |_| {
        vm.state.with(|s| {
            s.draft
                .section_index(section_key)
                .map(|i| s.draft.sections()[i].fields.clone())
                .unwrap_or_default()
        })
    });

    let add_field = move || {
        match vm.add_field(section_key, &label.get_untracked(), field_type.get_untracked()) {
            Ok(()) => {
                label.set(String::new());
                hint.set(None);
            }
            Err(e) => hint.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="builder-section">
            <div class="builder-section__header">
                <h4>{name}</h4>
                <button
                    type="button"
                    class="btn btn-secondary"
                    title="Remove section"
                    on:click=move |_| vm.remove_section(section_key)
                >
                    {icon("delete")}
                </button>
            </div>

            <ul class="builder-section__fields">
                {move || fields.get().into_iter().map(|field| {
                    let field_key = field.key;
                    view! {
                        <li>
                            <span class="field-label">{field.label}</span>
                            <span class="field-type">{field.field_type.display_name()}</span>
                            <button
                                type="button"
                                class="btn btn-link"
                                title="Remove field"
                                on:click=move |_| vm.remove_field(section_key, field_key)
                            >
                                {icon("delete")}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <div class="builder-section__add-field">
                <input
                    type="text"
                    placeholder="Field Label"
                    prop:value=move || label.get()
                    on:input=move |ev| label.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || field_type.get().code()
                    on:change=move |ev| {
                        if let Some(t) = FieldType::from_code(&event_target_value(&ev)) {
                            field_type.set(t);
                        }
                    }
                >
                    {FieldType::all().into_iter().map(|t| view! {
                        <option value=t.code()>{t.display_name()}</option>
                    }).collect_view()}
                </select>
                <button type="button" class="btn" on:click=move |_| add_field()>
                    {icon("plus")}
                    "Add Field"
                </button>
            </div>
            {move || hint.get().map(|h| view! { <div class="hint text-red-700">{h}</div> })}
        </div>
    }
}
