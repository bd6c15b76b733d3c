use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser::BrowserScheduler;
use crate::motion::{Scheduler, TaskHandle};

/// How long the fake submission spins before reporting success.
pub const SUBMIT_DELAY_MS: u32 = 1500;
/// How long the success notice stays up.
pub const SUCCESS_NOTICE_MS: u32 = 5000;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().chars().count() < 2 {
            errors.push(FieldError {
                field: Field::Name,
                message: "Name must be at least 2 characters.",
            });
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(FieldError {
                field: Field::Email,
                message: "Invalid email address.",
            });
        }
        if self.message.trim().chars().count() < 10 {
            errors.push(FieldError {
                field: Field::Message,
                message: "Message must be at least 10 characters.",
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Submitted,
}

struct SubmissionInner {
    phase: SubmitPhase,
    scheduler: Rc<dyn Scheduler>,
    // One slot per step so a running task never drops its own handle.
    send_task: Option<TaskHandle>,
    reset_task: Option<TaskHandle>,
    on_change: Rc<dyn Fn(SubmitPhase)>,
    disposed: bool,
}

/// Simulated delivery of the contact form: `Submitting` for
/// [`SUBMIT_DELAY_MS`], then `Submitted` for [`SUCCESS_NOTICE_MS`], then back
/// to `Idle`.
#[derive(Clone)]
pub struct Submission {
    inner: Rc<RefCell<SubmissionInner>>,
}

impl Submission {
    pub fn new(scheduler: Rc<dyn Scheduler>, on_change: impl Fn(SubmitPhase) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SubmissionInner {
                phase: SubmitPhase::Idle,
                scheduler,
                send_task: None,
                reset_task: None,
                on_change: Rc::new(on_change),
                disposed: false,
            })),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.inner.borrow().phase
    }

    /// Starts a submission. Ignored while one is already in flight.
    pub fn submit(&self) -> bool {
        let scheduler = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || inner.phase == SubmitPhase::Submitting {
                return false;
            }
            inner.reset_task = None;
            inner.scheduler.clone()
        };
        self.transition(SubmitPhase::Submitting);

        let weak = Rc::downgrade(&self.inner);
        let task = scheduler.schedule(
            SUBMIT_DELAY_MS,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Submission { inner }.delivered();
                }
            }),
        );
        self.inner.borrow_mut().send_task = Some(task);
        true
    }

    pub fn dispose(&self) {
        let (send, reset) = {
            let mut inner = self.inner.borrow_mut();
            inner.disposed = true;
            (inner.send_task.take(), inner.reset_task.take())
        };
        drop(send);
        drop(reset);
    }

    fn delivered(&self) {
        info!("Contact form submitted");
        self.transition(SubmitPhase::Submitted);

        let weak = Rc::downgrade(&self.inner);
        let scheduler = self.inner.borrow().scheduler.clone();
        let task = scheduler.schedule(
            SUCCESS_NOTICE_MS,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Submission { inner }.transition(SubmitPhase::Idle);
                }
            }),
        );
        self.inner.borrow_mut().reset_task = Some(task);
    }

    fn transition(&self, phase: SubmitPhase) {
        let on_change = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.phase = phase;
            inner.on_change.clone()
        };
        on_change(phase);
    }
}

fn error_for(errors: &[FieldError], field: Field) -> Html {
    match errors.iter().find(|e| e.field == field) {
        Some(error) => html! { <p class="form-error">{error.message}</p> },
        None => html! {},
    }
}

#[function_component(ContactFormCard)]
pub fn contact_form_card() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let phase = use_state(|| SubmitPhase::Idle);
    let submission = use_mut_ref(|| None::<Submission>);

    {
        let form = form.clone();
        let phase = phase.clone();
        let submission = submission.clone();
        use_effect_with_deps(
            move |_| {
                let created = Submission::new(Rc::new(BrowserScheduler), move |next| {
                    if next == SubmitPhase::Submitted {
                        form.set(ContactForm::default());
                    }
                    phase.set(next);
                });
                *submission.borrow_mut() = Some(created.clone());
                move || created.dispose()
            },
            (),
        );
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };
    let on_name = on_input(Field::Name).reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });
    let on_email = on_input(Field::Email).reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });
    let on_message = on_input(Field::Message).reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlTextAreaElement>().value()
    });

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    errors.set(Vec::new());
                    if let Some(submission) = submission.borrow().as_ref() {
                        submission.submit();
                    }
                }
                Err(found) => errors.set(found),
            }
        })
    };

    let submitting = *phase == SubmitPhase::Submitting;

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            <div class="form-row">
                <div class="form-field">
                    <label for="name">{"Full Name *"}</label>
                    <input type="text" id="name" name="name" placeholder="Your name"
                        value={form.name.clone()} oninput={on_name} />
                    { error_for(&errors, Field::Name) }
                </div>
                <div class="form-field">
                    <label for="email">{"Email Address *"}</label>
                    <input type="email" id="email" name="email" placeholder="you@company.com"
                        value={form.email.clone()} oninput={on_email} />
                    { error_for(&errors, Field::Email) }
                </div>
            </div>
            <div class="form-field">
                <label for="message">{"Message *"}</label>
                <textarea id="message" name="message" rows="5" placeholder="Tell us about your project"
                    value={form.message.clone()} oninput={on_message} />
                { error_for(&errors, Field::Message) }
            </div>
            <button type="submit" class="orbit-btn" disabled={submitting}>
                { if submitting { "Sending..." } else { "Send Message" } }
            </button>
            {
                if *phase == SubmitPhase::Submitted {
                    html! {
                        <p class="form-success">
                            {"Thanks for reaching out! We'll get back to you shortly."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::FakeClock;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha Roy".to_string(),
            email: "asha@example.com".to_string(),
            message: "We need a new storefront.".to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn each_rule_reports_its_field() {
        let mut form = filled();
        form.set(Field::Name, " A ".to_string());
        form.set(Field::Email, "asha@example".to_string());
        form.set(Field::Message, "Hi there".to_string());
        let fields: Vec<Field> = form.validate().unwrap_err().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn email_shapes() {
        let mut form = filled();
        for bad in ["", "plain", "a@b", "a b@c.d", "@c.d"] {
            form.set(Field::Email, bad.to_string());
            assert!(form.validate().is_err(), "{bad} should be rejected");
        }
        form.set(Field::Email, "first.last@sub.example.co".to_string());
        assert!(form.validate().is_ok());
    }

    fn recording(clock: &FakeClock) -> (Submission, Rc<RefCell<Vec<SubmitPhase>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let submission = Submission::new(Rc::new(clock.clone()), move |p| sink.borrow_mut().push(p));
        (submission, seen)
    }

    #[test]
    fn submission_runs_through_phases() {
        let clock = FakeClock::new();
        let (submission, seen) = recording(&clock);

        assert!(submission.submit());
        assert_eq!(submission.phase(), SubmitPhase::Submitting);
        assert!(!submission.submit());

        clock.advance(SUBMIT_DELAY_MS as u64 - 1);
        assert_eq!(submission.phase(), SubmitPhase::Submitting);
        clock.advance(1);
        assert_eq!(submission.phase(), SubmitPhase::Submitted);
        clock.advance(SUCCESS_NOTICE_MS as u64);
        assert_eq!(submission.phase(), SubmitPhase::Idle);

        assert_eq!(
            *seen.borrow(),
            vec![SubmitPhase::Submitting, SubmitPhase::Submitted, SubmitPhase::Idle]
        );
    }

    #[test]
    fn resubmitting_during_notice_cancels_old_reset() {
        let clock = FakeClock::new();
        let (submission, _) = recording(&clock);

        submission.submit();
        clock.advance(SUBMIT_DELAY_MS as u64 + 1000);
        assert!(submission.submit());
        clock.advance(SUCCESS_NOTICE_MS as u64 - 1000);
        // The first notice's reset would have landed here.
        assert_eq!(submission.phase(), SubmitPhase::Submitted);
    }

    #[test]
    fn disposed_submission_stays_silent() {
        let clock = FakeClock::new();
        let (submission, seen) = recording(&clock);

        submission.submit();
        submission.dispose();
        assert_eq!(clock.pending(), 0);
        clock.advance(10_000);
        assert!(!submission.submit());
        assert_eq!(*seen.borrow(), vec![SubmitPhase::Submitting]);
    }
}
