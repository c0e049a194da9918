use web_sys::js_sys::Math;
use yew::prelude::*;

const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Clone, PartialEq)]
struct Particle {
    left: f64,
    size: f64,
    delay: f64,
    duration: f64,
}

fn particle_count(viewport_width: f64) -> usize {
    // Fewer particles on mobile
    if viewport_width < MOBILE_BREAKPOINT {
        20
    } else {
        50
    }
}

fn spawn_particles() -> Vec<Particle> {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT);

    (0..particle_count(width))
        .map(|_| Particle {
            left: Math::random() * 100.0,
            size: Math::random() * 4.0 + 2.0,
            delay: Math::random() * 8.0,
            duration: Math::random() * 4.0 + 4.0,
        })
        .collect()
}

#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    // Generated once per mount so re-renders don't reshuffle the field.
    let particles = use_state(spawn_particles);

    html! {
        <div id="particles" class="particles">
            { for particles.iter().map(|p| html! {
                <div
                    class="particle"
                    style={format!(
                        "left: {:.2}%; width: {:.2}px; height: {:.2}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                        p.left, p.size, p.size, p.delay, p.duration
                    )}
                ></div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_particles_on_narrow_viewports() {
        assert_eq!(particle_count(320.0), 20);
        assert_eq!(particle_count(767.9), 20);
        assert_eq!(particle_count(1440.0), 50);
    }
}
