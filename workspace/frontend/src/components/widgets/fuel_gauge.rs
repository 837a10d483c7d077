use stash_common::progress::{GaugeGeometry, Tone, GAUGE_ARC_LENGTH};
use stylist::yew::styled_component;
use yew::prelude::*;

const ARC_PATH: &str = "M 20 100 A 80 80 0 0 1 180 100";

fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "oklch(var(--su))",
        Tone::Warning => "oklch(var(--wa))",
        Tone::Danger => "oklch(var(--er))",
    }
}

#[derive(Properties, PartialEq)]
pub struct FuelGaugeProps {
    /// 0..=1, clamped
    pub value: f64,
    pub label: AttrValue,
    pub sublabel: AttrValue,
}

/// Half-circle gauge: the needle sweeps from EMPTY (-90°) to FULL (+90°).
#[styled_component]
pub fn FuelGauge(props: &FuelGaugeProps) -> Html {
    let geometry = GaugeGeometry::new(props.value);

    let animated = css!(
        r#"
        & .gauge-needle {
            transform-origin: 100px 100px;
            transition: transform 1.5s ease-out;
        }
        & .gauge-fill {
            transition: stroke-dashoffset 1.5s ease-out;
        }
        "#
    );

    let needle_style = format!("transform: rotate({:.2}deg);", geometry.needle_degrees);
    let label_style = format!("color: {};", tone_color(geometry.tone));

    html! {
        <div class={classes!("flex", "flex-col", "items-center", "py-2", animated)}>
            <svg viewBox="0 0 200 120" class="w-full max-w-[260px]">
                <defs>
                    <linearGradient id="gaugeGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="oklch(var(--er))" />
                        <stop offset="50%" stop-color="oklch(var(--wa))" />
                        <stop offset="100%" stop-color="oklch(var(--su))" />
                    </linearGradient>
                </defs>
                <path d={ARC_PATH} fill="none" stroke="currentColor" stroke-width="14"
                    stroke-linecap="round" opacity="0.15" />
                <path class="gauge-fill" d={ARC_PATH} fill="none" stroke="url(#gaugeGradient)"
                    stroke-width="14" stroke-linecap="round"
                    stroke-dasharray={GAUGE_ARC_LENGTH.to_string()}
                    stroke-dashoffset={format!("{:.2}", geometry.dash_offset)} />
                <g class="gauge-needle" style={needle_style}>
                    <line x1="100" y1="100" x2="100" y2="38" stroke="currentColor"
                        stroke-width="2.5" stroke-linecap="round" opacity="0.8" />
                    <circle cx="100" cy="100" r="7" fill="oklch(var(--p))" opacity="0.9" />
                    <circle cx="100" cy="100" r="2.5" fill="currentColor" />
                </g>
                <text x="20" y="118" font-size="9" text-anchor="start" opacity="0.6">{"EMPTY"}</text>
                <text x="180" y="118" font-size="9" text-anchor="end" opacity="0.6">{"FULL"}</text>
            </svg>
            <div class="text-center -mt-2">
                <div class="text-3xl font-bold tracking-tight" style={label_style}>{&props.label}</div>
                <div class="text-sm opacity-70 mt-0.5">{&props.sublabel}</div>
            </div>
        </div>
    }
}
