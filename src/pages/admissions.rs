use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::admission_form::AdmissionForm;
use crate::scroll;

/// `(id, nav label)` for every section the navbar links to, in document order.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("programs", "Programs"),
    ("faculty", "Faculty"),
    ("fees", "Fees"),
    ("admissions", "Admissions"),
    ("contact", "Contact"),
];

const PROGRAMS: &[(&str, &str)] = &[
    ("Early Years", "Play-based learning for ages 3 to 5 with a focus on curiosity and social skills."),
    ("Primary School", "Strong foundations in literacy, numeracy and science, taught in small classes."),
    ("Middle School", "Project work, languages and the arts alongside a rigorous core curriculum."),
    ("High School", "University preparation with advanced courses and individual mentoring."),
];

const FACULTY: &[(&str, &str)] = &[
    ("Dr. Helen Carter", "Head of Academics"),
    ("Mr. James Okafor", "Mathematics"),
    ("Ms. Priya Raman", "Science"),
    ("Mrs. Laura Nilsson", "Languages & Literature"),
];

const FEES: &[(&str, &str, &str)] = &[
    ("Early Years", "$450", "$4,800"),
    ("Primary School", "$500", "$6,200"),
    ("Middle School", "$500", "$7,100"),
    ("High School", "$600", "$8,400"),
];

#[function_component(AdmissionsPage)]
pub fn admissions_page() -> Html {
    // Hero parallax and reveal-on-scroll. Both run on every scroll event, undebounced.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().expect("no global window");
            let document = window.document().expect("window has no document");
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Ok(scroll_y) = window_clone.scroll_y() {
                    scroll::apply_parallax(&document, scroll_y);
                }
                scroll::reveal_in_view(&window_clone, &document);
            }) as Box<dyn FnMut()>);

            let _ = window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());

            // Initial check
            if let Some(document) = window.document() {
                scroll::reveal_in_view(&window, &document);
            }

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }
        },
        (),
    );

    html! {
        <main class="admissions-page">
            <section id="home" class="hero-section">
                <div class="container hero-content">
                    <h1 class="display-3">{"Brightwood Academy"}</h1>
                    <p class="lead">{"Where curious minds grow into confident learners. Admissions for the coming school year are now open."}</p>
                    <a href="#admissions" class="btn btn-warning btn-lg" onclick={Callback::from(|e: MouseEvent| {
                        e.prevent_default();
                        scroll::scroll_to_section("admissions");
                    })}>
                        {"Apply Now"}
                    </a>
                </div>
            </section>

            <section id="about" class="py-5">
                <div class="container">
                    <h2>{"About Us"}</h2>
                    <p>{"For over forty years Brightwood Academy has combined academic excellence with a warm, inclusive community. Our students learn to think independently, work together and care for the world around them."}</p>
                </div>
            </section>

            <section id="programs" class="py-5 bg-light">
                <div class="container">
                    <h2>{"Our Programs"}</h2>
                    <div class="row">
                        { for PROGRAMS.iter().map(|(title, blurb)| html! {
                            <div class="col-md-6 col-lg-3 mb-4" key={*title}>
                                <div class="card h-100">
                                    <div class="card-body">
                                        <h5 class="card-title">{*title}</h5>
                                        <p class="card-text">{*blurb}</p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="faculty" class="py-5">
                <div class="container">
                    <h2>{"Meet Our Faculty"}</h2>
                    <div class="row">
                        { for FACULTY.iter().map(|(name, role)| html! {
                            <div class="col-md-3 mb-4" key={*name}>
                                <div class="faculty-card text-center p-3">
                                    <h5>{*name}</h5>
                                    <p class="text-muted">{*role}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="fees" class="py-5 bg-light">
                <div class="container">
                    <h2>{"Fee Structure"}</h2>
                    <table class="table table-striped">
                        <thead>
                            <tr>
                                <th>{"Program"}</th>
                                <th>{"Registration"}</th>
                                <th>{"Annual Tuition"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for FEES.iter().map(|(program, registration, tuition)| html! {
                                <tr key={*program}>
                                    <td>{*program}</td>
                                    <td>{*registration}</td>
                                    <td>{*tuition}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </section>

            <section id="admissions" class="py-5">
                <div class="container">
                    <h2>{"Apply for Admission"}</h2>
                    <p>{"Fields marked with * are required."}</p>
                    <AdmissionForm />
                </div>
            </section>

            <section id="contact" class="py-5 bg-light">
                <div class="container">
                    <h2>{"Contact Us"}</h2>
                    <p>{"12 Brightwood Lane, Maple Grove"}</p>
                    <p>{"admissions@brightwood.example · (555) 010-2040"}</p>
                </div>
            </section>

            <style>
                {r#"
                    .fade-in-up {
                        animation: fadeInUp 0.6s ease-out both;
                    }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-section {
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        color: #fff;
                        background: linear-gradient(135deg, #2c5aa0 0%, #17a2b8 100%);
                        will-change: transform;
                    }
                    .faculty-card {
                        border-radius: 12px;
                        background: #fff;
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                    }
                    .nav-link.active {
                        font-weight: 600;
                        border-bottom: 2px solid #ffc107;
                    }
                "#}
            </style>
        </main>
    }
}
