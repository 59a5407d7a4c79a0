//! Static host for the portfolio frontend: page metadata plus the global
//! stylesheet (resets, font stack, background-orb keyframes).

use moon::prelude::*;

const GLOBAL_STYLES: &str = r#"<style>
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        font-family: Inter, "Segoe UI", system-ui, -apple-system, sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    ::selection {
        background: rgba(108, 162, 255, 0.35);
    }
    .bg-orb {
        position: absolute;
        width: 60vmax;
        height: 60vmax;
        border-radius: 50%;
    }
    .bg-orb-a {
        top: -18vmax;
        right: -14vmax;
        animation: orb-drift-a 26s ease-in-out infinite alternate;
    }
    .bg-orb-b {
        bottom: -22vmax;
        left: -16vmax;
        animation: orb-drift-b 34s ease-in-out infinite alternate;
    }
    @keyframes orb-drift-a {
        from { transform: translate(0, 0) scale(1); }
        to { transform: translate(-7vmax, 9vmax) scale(1.12); }
    }
    @keyframes orb-drift-b {
        from { transform: translate(0, 0) scale(1.05); }
        to { transform: translate(8vmax, -6vmax) scale(0.94); }
    }
    @media (prefers-reduced-motion: reduce) {
        .bg-orb-a, .bg-orb-b { animation: none; }
    }
</style>"#;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Jordan Reyes — Portfolio")
        .append_to_head(GLOBAL_STYLES)
}

async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_| {}).await
}
