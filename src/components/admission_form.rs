use chrono::{Local, NaiveDate};
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::admission::form::{FieldSpec, FormAction, FormState, SubmissionPhase};
use crate::admission::submit::{run_submission, SimulatedSubmitter};
use crate::admission::validation::FieldKind;
use crate::components::confetti::Confetti;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn scroll_into_center(node: &NodeRef) {
    let Some(element) = node.cast::<Element>() else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(AdmissionForm)]
pub fn admission_form() -> Html {
    let state = use_reducer(FormState::default);
    let acknowledgment_ref = use_node_ref();

    // Drives Submitting -> Acknowledged and the reveal that follows it.
    {
        let dispatcher = state.dispatcher();
        let application = state.application();
        let acknowledgment_ref = acknowledgment_ref.clone();
        use_effect_with_deps(
            move |phase| {
                match phase {
                    SubmissionPhase::Submitting => {
                        debug!("Application passed validation, submitting");
                        spawn_local(async move {
                            let submitter = SimulatedSubmitter::default();
                            run_submission(&submitter, application, move |action| {
                                dispatcher.dispatch(action)
                            })
                            .await;
                        });
                    }
                    SubmissionPhase::Acknowledged => {
                        info!("Application acknowledged");
                        scroll_into_center(&acknowledgment_ref);
                    }
                    SubmissionPhase::Idle => {}
                }
                || ()
            },
            state.phase(),
        );
    }

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(FormAction::Submit { today: today() });
        })
    };

    let render_field = |spec: &'static FieldSpec| -> Html {
        let field = spec.name;
        let error = state.error(field);

        let onblur = {
            let state = state.clone();
            Callback::from(move |_: FocusEvent| {
                state.dispatch(FormAction::Blur { field, today: today() });
            })
        };

        let control = match spec.kind {
            FieldKind::Select => {
                let onchange = {
                    let state = state.clone();
                    Callback::from(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        state.dispatch(FormAction::Input { field, value: select.value() });
                    })
                };
                html! {
                    <select
                        id={field}
                        name={field}
                        class={classes!("form-select", error.map(|_| "is-invalid"))}
                        required={spec.required}
                        {onchange}
                        {onblur}
                    >
                        <option value="" selected={state.value(field).is_empty()}>{spec.placeholder}</option>
                        { for spec.options.iter().map(|(value, label)| html! {
                            <option value={*value} selected={state.value(field) == *value}>{*label}</option>
                        }) }
                    </select>
                }
            }
            FieldKind::TextArea => {
                let oninput = {
                    let state = state.clone();
                    Callback::from(move |e: InputEvent| {
                        let area: HtmlTextAreaElement = e.target_unchecked_into();
                        state.dispatch(FormAction::Input { field, value: area.value() });
                    })
                };
                html! {
                    <textarea
                        id={field}
                        name={field}
                        rows="3"
                        class={classes!("form-control", error.map(|_| "is-invalid"))}
                        placeholder={spec.placeholder}
                        required={spec.required}
                        value={state.value(field).to_string()}
                        {oninput}
                        {onblur}
                    />
                }
            }
            kind => {
                let oninput = {
                    let state = state.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        state.dispatch(FormAction::Input { field, value: input.value() });
                    })
                };
                html! {
                    <input
                        id={field}
                        name={field}
                        type={kind.input_type()}
                        class={classes!("form-control", error.map(|_| "is-invalid"))}
                        placeholder={spec.placeholder}
                        required={spec.required}
                        value={state.value(field).to_string()}
                        {oninput}
                        {onblur}
                    />
                }
            }
        };

        html! {
            <div class="col-md-6 mb-3" key={field}>
                <label for={field} class="form-label">
                    {spec.label}
                    if spec.required {
                        <span class="text-danger">{" *"}</span>
                    }
                </label>
                {control}
                if let Some(error) = error {
                    <div class="invalid-feedback">{error.to_string()}</div>
                }
            </div>
        }
    };

    let form_style = if state.is_form_visible() { "" } else { "display: none;" };
    let acknowledgment_style = if state.is_acknowledgment_visible() {
        "animation: fadeInUp 0.8s ease-out;"
    } else {
        ""
    };

    html! {
        <>
            <form id="admissionForm" class="admission-form" style={form_style} novalidate={true} {onsubmit}>
                <div class="row">
                    { for state.fields().iter().map(render_field) }
                </div>
                <button type="submit" class="btn btn-primary btn-lg" disabled={state.submit_disabled()}>
                    {state.submit_label()}
                </button>
            </form>
            <div
                id="acknowledgmentMessage"
                ref={acknowledgment_ref}
                class={classes!("acknowledgment", "alert", "alert-success", (!state.is_acknowledgment_visible()).then(|| "d-none"))}
                style={acknowledgment_style}
            >
                <h3>{"Thank you for applying!"}</h3>
                <p>{"We have received your application. Our admissions team will contact you within 3-5 business days."}</p>
            </div>
            <Confetti celebrations={state.celebrations()} />
        </>
    }
}
