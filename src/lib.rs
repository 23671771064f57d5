pub mod deck;
pub mod gesture;
pub mod session;
pub mod storage;
pub mod view;

use deck::{sample_cards, Deck, ProfileCard};
use gesture::{Release, SwipeDirection, SwipeTracker};
use session::{Identity, Session};
use view::{Overlays, Screen};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let session = use_state(|| Session::new(storage::load_identity()));
    let deck = use_state(|| {
        let mut cards = storage::load_cards();
        if cards.is_empty() {
            cards = sample_cards();
            storage::save_cards(&cards);
            log::info!("Seeded the deck with {} sample cards", cards.len());
        }
        Deck::new(cards)
    });
    let tracker = use_state(SwipeTracker::default);
    let overlays = use_state(Overlays::default);

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let image_ref = use_node_ref();
    let subtitle_ref = use_node_ref();

    {
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |state: &SwipeTracker| {
                let background = body_background_for_offset(state.offset().0);
                if let Some(window) = window() {
                    if let Some(document) = window.document() {
                        if let Some(body) = document.body() {
                            let style = body.style();
                            let _ = style.set_property("transition", "background 0.25s ease");
                            match background {
                                Some(gradient) => {
                                    let _ = style.set_property("background", &gradient);
                                    let _ = style.set_property("background-image", &gradient);
                                }
                                None => {
                                    let _ = style.remove_property("background");
                                    let _ = style.remove_property("background-image");
                                }
                            }
                        }
                    }
                }
                || ()
            },
            (*tracker).clone(),
        );
    }

    let on_swipe = {
        let deck = deck.clone();
        Callback::from(move |direction: SwipeDirection| {
            let mut updated = (*deck).clone();
            if updated.commit_swipe(direction) {
                storage::save_cards(updated.cards());
                deck.set(updated);
            }
        })
    };

    let on_login = {
        let session = session.clone();
        let deck = deck.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let mut updated = (*session).clone();
            let minted_id = deck.mint_id();
            if updated.login(&username_input.value(), &password_input.value(), minted_id) {
                if let Some(identity) = updated.current() {
                    storage::save_identity(identity);
                }
                session.set(updated);
            }
        })
    };

    let on_logout = {
        let session = session.clone();
        let overlays = overlays.clone();
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = (*session).clone();
            updated.logout();
            storage::clear_identity();
            session.set(updated);
            overlays.set(Overlays::default());
            tracker.set(SwipeTracker::default());
        })
    };

    let on_open_upload = {
        let overlays = overlays.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = *overlays;
            updated.open_upload();
            overlays.set(updated);
        })
    };

    let on_toggle_stats = {
        let overlays = overlays.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = *overlays;
            updated.toggle_stats();
            overlays.set(updated);
        })
    };

    let on_close_stats = {
        let overlays = overlays.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = *overlays;
            updated.close_stats();
            overlays.set(updated);
        })
    };

    let on_close_upload = {
        let overlays = overlays.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = *overlays;
            updated.close_upload();
            overlays.set(updated);
        })
    };

    let on_upload = {
        let deck = deck.clone();
        let session = session.clone();
        let overlays = overlays.clone();
        let image_ref = image_ref.clone();
        let subtitle_ref = subtitle_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(owner) = (*session).current().cloned() else {
                return;
            };
            let (Some(image_input), Some(subtitle_input)) = (
                image_ref.cast::<HtmlInputElement>(),
                subtitle_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let image = image_input.value();
            if image.trim().is_empty() {
                return;
            }

            let mut updated = (*deck).clone();
            updated.add_card(image, subtitle_input.value(), &owner);
            storage::save_cards(updated.cards());
            deck.set(updated);

            image_input.set_value("");
            subtitle_input.set_value("");

            let mut toggles = *overlays;
            toggles.close_upload();
            overlays.set(toggles);
        })
    };

    let pointer_down = {
        let tracker = tracker.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            event.prevent_default();
            let mut updated = (*tracker).clone();
            if !updated.pointer_down(
                event.pointer_id(),
                event.client_x() as f64,
                event.client_y() as f64,
            ) {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(event.pointer_id());
            }
            tracker.set(updated);
        })
    };

    let pointer_move = {
        let tracker = tracker.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            let mut updated = (*tracker).clone();
            if updated.pointer_move(
                event.pointer_id(),
                event.client_x() as f64,
                event.client_y() as f64,
            ) {
                event.prevent_default();
                tracker.set(updated);
            }
        })
    };

    // Pointer-up, pointer-cancel, and the pointer leaving the card all
    // release the drag with the last known offset.
    let pointer_end = {
        let tracker = tracker.clone();
        let on_swipe = on_swipe.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            let mut updated = (*tracker).clone();
            match updated.pointer_up(event.pointer_id()) {
                Release::Ignored => {}
                release => {
                    if let Some(target) = event
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    {
                        let _ = target.release_pointer_capture(event.pointer_id());
                    }
                    if let Release::Commit(direction) = release {
                        on_swipe.emit(direction);
                    }
                    tracker.set(updated);
                }
            }
        })
    };

    let screen = view::resolve((*session).is_logged_in(), *overlays);

    if screen == Screen::Login {
        return render_login_screen(&username_ref, &password_ref, on_login);
    }

    html! {
        <div class="app-shell">
            { render_nav_bar(on_open_upload, on_toggle_stats, on_logout) }
            {
                match screen {
                    Screen::Stats => render_stats_overlay(&deck, (*session).current(), on_close_stats),
                    Screen::Upload => render_upload_modal(&image_ref, &subtitle_ref, on_close_upload, on_upload),
                    _ => render_deck_area(&deck, &tracker, pointer_down, pointer_move, pointer_end, on_swipe),
                }
            }
        </div>
    }
}

fn render_login_screen(
    username_ref: &NodeRef,
    password_ref: &NodeRef,
    on_login: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="login-screen">
            <div class="login-panel">
                <h2>{ "Welcome to SwipeApp" }</h2>
                <input ref={username_ref.clone()} type="text" placeholder="Username" />
                <input ref={password_ref.clone()} type="password" placeholder="Password" />
                <button class="login-button" onclick={on_login}>{ "Login" }</button>
            </div>
        </div>
    }
}

fn render_nav_bar(
    on_open_upload: Callback<MouseEvent>,
    on_toggle_stats: Callback<MouseEvent>,
    on_logout: Callback<MouseEvent>,
) -> Html {
    html! {
        <nav class="nav-bar">
            <h1>{ "SwipeApp" }</h1>
            <div class="nav-actions">
                <button class="nav-button upload" title="Upload" onclick={on_open_upload}>{ "+" }</button>
                <button class="nav-button stats" title="Your posts" onclick={on_toggle_stats}>{ "👤" }</button>
                <button class="nav-button logout" title="Logout" onclick={on_logout}>{ "⎋" }</button>
            </div>
        </nav>
    }
}

fn render_stats_overlay(
    deck: &UseStateHandle<Deck>,
    identity: Option<&Identity>,
    on_close: Callback<MouseEvent>,
) -> Html {
    let posts = identity
        .map(|identity| deck.posts_owned_by(identity))
        .unwrap_or_default();

    let content = if posts.is_empty() {
        html! { <p class="stats-empty">{ "No posts yet. Upload your first photo!" }</p> }
    } else {
        html! {
            <div class="stats-list">
                { for posts.iter().map(|post| render_post_stats(post)) }
            </div>
        }
    };

    html! {
        <div class="overlay-backdrop">
            <div class="overlay-panel stats-panel">
                <div class="overlay-header">
                    <h2>{ "Your Posts & Stats" }</h2>
                    <button class="overlay-close" onclick={on_close}>{ "×" }</button>
                </div>
                { content }
            </div>
        </div>
    }
}

fn render_post_stats(post: &ProfileCard) -> Html {
    let rate = post.smash_rate();
    html! {
        <div class="stats-entry" key={post.id.to_string()}>
            <img src={post.image.clone()} alt={post.name.clone()} />
            <div class="stats-detail">
                <h3>{ &post.subtitle }</h3>
                <div class="stats-counts">
                    <span class="smash-count">{ format!("❤️ {} Smashes", post.smashes) }</span>
                    <span class="pass-count">{ format!("✕ {} Passes", post.passes) }</span>
                </div>
                <span class="smash-rate">{ format!("{rate}% Smash Rate") }</span>
                <div class="rate-track">
                    <div class="rate-fill" style={format!("width: {rate}%")}></div>
                </div>
            </div>
        </div>
    }
}

fn render_upload_modal(
    image_ref: &NodeRef,
    subtitle_ref: &NodeRef,
    on_cancel: Callback<MouseEvent>,
    on_upload: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="overlay-backdrop">
            <div class="overlay-panel upload-panel">
                <div class="overlay-header">
                    <h2>{ "Upload New Photo" }</h2>
                    <button class="overlay-close" onclick={on_cancel.clone()}>{ "×" }</button>
                </div>
                <div class="upload-form">
                    <label>{ "Image URL" }</label>
                    <input ref={image_ref.clone()} type="url"
                        placeholder="https://example.com/image.jpg" />
                    <label>{ "Subtitle" }</label>
                    <input ref={subtitle_ref.clone()} type="text"
                        placeholder="Tell them about yourself..." />
                    <div class="upload-actions">
                        <button class="upload-cancel" onclick={on_cancel}>{ "Cancel" }</button>
                        <button class="upload-submit" onclick={on_upload}>{ "Upload" }</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn render_deck_area(
    deck: &UseStateHandle<Deck>,
    tracker: &UseStateHandle<SwipeTracker>,
    pointer_down: Callback<web_sys::PointerEvent>,
    pointer_move: Callback<web_sys::PointerEvent>,
    pointer_end: Callback<web_sys::PointerEvent>,
    on_swipe: Callback<SwipeDirection>,
) -> Html {
    let Some(card) = deck.top_card() else {
        return html! {
            <main class="deck-area">
                <div class="card empty-card">
                    <h3>{ "No more cards!" }</h3>
                    <p>{ "Check back later for more profiles" }</p>
                </div>
            </main>
        };
    };

    let (offset_x, offset_y) = tracker.offset();
    let is_dragging = tracker.is_dragging();
    let transform_style = format!(
        "transform: translateX({:.1}px) translateY({:.1}px) rotate({:.2}deg); opacity: {:.3}; transition: {};",
        offset_x,
        offset_y,
        gesture::rotation_degrees(offset_x),
        gesture::card_opacity(offset_x).clamp(0.0, 1.0),
        if is_dragging {
            "none"
        } else {
            "transform 0.25s ease, opacity 0.25s ease"
        }
    );

    let hint_badge = match gesture::swipe_hint(offset_x) {
        Some(SwipeDirection::Smash) => html! { <span class="hint-badge smash">{ "SMASH" }</span> },
        Some(SwipeDirection::Pass) => html! { <span class="hint-badge pass">{ "PASS" }</span> },
        None => html! {},
    };

    let on_pass = {
        let on_swipe = on_swipe.clone();
        Callback::from(move |_: MouseEvent| on_swipe.emit(SwipeDirection::Pass))
    };
    let on_smash = Callback::from(move |_: MouseEvent| on_swipe.emit(SwipeDirection::Smash));

    html! {
        <>
            <main class="deck-area">
                <div class="card profile-card"
                    style={transform_style}
                    onpointerdown={pointer_down}
                    onpointermove={pointer_move}
                    onpointerup={pointer_end.clone()}
                    onpointercancel={pointer_end.clone()}
                    onpointerleave={pointer_end}>
                    <img src={card.image.clone()} alt={card.name.clone()} draggable="false" />
                    <div class="card-body">
                        <h3>{ format!("{}, {}", card.name, card.age) }</h3>
                        <p>{ &card.subtitle }</p>
                    </div>
                    { hint_badge }
                </div>
            </main>
            <div class="action-bar">
                <button class="action-button pass" onclick={on_pass}>{ "✕" }</button>
                <button class="action-button smash" onclick={on_smash}>{ "♥" }</button>
            </div>
        </>
    }
}

fn body_background_for_offset(offset_x: f64) -> Option<String> {
    let normalized = (offset_x / gesture::COMMIT_THRESHOLD).clamp(-1.0, 1.0);
    if normalized.abs() < 0.01 {
        return None;
    }

    let strength = normalized.abs();
    let start_alpha = 0.18 * strength;
    let end_alpha = 0.38 * strength + 0.02;
    if normalized > 0.0 {
        Some(format!(
            "radial-gradient(circle at top, rgba(34, 197, 94, {:.3}), rgba(5, 46, 22, {:.3}))",
            start_alpha, end_alpha
        ))
    } else {
        Some(format!(
            "radial-gradient(circle at top, rgba(239, 68, 68, {:.3}), rgba(69, 10, 10, {:.3}))",
            start_alpha, end_alpha
        ))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_clears_near_rest() {
        assert!(body_background_for_offset(0.0).is_none());
        assert!(body_background_for_offset(0.5).is_none());
    }

    #[test]
    fn background_tints_by_drag_direction() {
        let smash = body_background_for_offset(80.0).expect("tinted");
        assert!(smash.contains("34, 197, 94"));
        let pass = body_background_for_offset(-80.0).expect("tinted");
        assert!(pass.contains("239, 68, 68"));
    }
}
