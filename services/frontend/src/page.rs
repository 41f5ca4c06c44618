//! Server-side rendering of the dashboard page
//!
//! One HTML document built from the view state, with a small embedded
//! script that drives the refresh button: POST /refresh, then repaint
//! the status panel from the returned view-state JSON.

use crate::dashboard::DashboardViewState;

/// Render the status panel for the current view state
pub fn render_panel(view: &DashboardViewState) -> String {
    if view.loading {
        return r#"<div class="hint-row"><span class="dot dot-yellow"></span>Checking backend...</div>"#
            .to_string();
    }

    if let Some(error) = &view.error {
        return format!(
            r#"<div class="error-box">
                <p class="error-title">Connection Error</p>
                <p class="error-message">{}</p>
                <p class="error-hint">Make sure the backend is running on <a href="http://localhost:3001">http://localhost:3001</a></p>
            </div>"#,
            error
        );
    }

    if let Some(status) = &view.status {
        return format!(
            r#"<div class="success-box">
                <div class="hint-row"><span class="dot dot-green"></span><strong>Backend is running</strong></div>
                <dl>
                    <dt>Status:</dt><dd>{}</dd>
                    <dt>Message:</dt><dd>{}</dd>
                    <dt>Timestamp:</dt><dd>{}</dd>
                </dl>
            </div>"#,
            status.status, status.message, status.timestamp
        );
    }

    // Unseeded placeholder; a page render replaces it immediately
    r#"<p>No status loaded.</p>"#.to_string()
}

/// Render the full dashboard page
pub fn render_page(view: &DashboardViewState) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Statusboard</title>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 640px; margin: 0 auto; padding: 2rem 1rem; color: #1f2937; }}
        h1 {{ text-align: center; }}
        .subtitle {{ text-align: center; color: #6b7280; }}
        .card {{ border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 1.5rem; margin: 1.5rem 0; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }}
        .dot {{ display: inline-block; width: 0.5rem; height: 0.5rem; border-radius: 50%; margin-right: 0.5rem; }}
        .dot-green {{ background: #22c55e; }}
        .dot-yellow {{ background: #eab308; }}
        .hint-row {{ display: flex; align-items: center; color: #374151; }}
        .error-box {{ background: #fef2f2; border-radius: 0.375rem; padding: 1rem; }}
        .error-title {{ color: #991b1b; font-weight: 600; margin: 0; }}
        .error-message {{ color: #b91c1c; margin: 0.25rem 0; }}
        .error-hint {{ color: #dc2626; font-size: 0.8rem; margin: 0.5rem 0 0; }}
        .success-box {{ background: #f0fdf4; border-radius: 0.375rem; padding: 1rem; }}
        dl {{ margin: 1rem 0 0; }}
        dt {{ font-weight: 600; color: #14532d; }}
        dd {{ margin: 0 0 0.5rem; color: #15803d; }}
        code {{ background: #f3f4f6; border-radius: 0.25rem; padding: 0.1rem 0.4rem; font-size: 0.85em; }}
        button {{ display: block; margin: 0 auto; background: #2563eb; color: white; border: none; border-radius: 0.5rem; padding: 0.5rem 1.5rem; font-size: 1rem; cursor: pointer; }}
        button:disabled {{ opacity: 0.5; cursor: not-allowed; }}
    </style>
    <script>
        function renderPanel(view) {{
            if (view.loading) {{
                return '<div class="hint-row"><span class="dot dot-yellow"></span>Checking backend...</div>';
            }}
            if (view.error) {{
                return `<div class="error-box">
                    <p class="error-title">Connection Error</p>
                    <p class="error-message">${{view.error}}</p>
                    <p class="error-hint">Make sure the backend is running on <a href="http://localhost:3001">http://localhost:3001</a></p>
                </div>`;
            }}
            if (view.status) {{
                return `<div class="success-box">
                    <div class="hint-row"><span class="dot dot-green"></span><strong>Backend is running</strong></div>
                    <dl>
                        <dt>Status:</dt><dd>${{view.status.status}}</dd>
                        <dt>Message:</dt><dd>${{view.status.message}}</dd>
                        <dt>Timestamp:</dt><dd>${{view.status.timestamp}}</dd>
                    </dl>
                </div>`;
            }}
            return '<p>No status loaded.</p>';
        }}

        async function refreshStatus() {{
            const btn = document.getElementById('refresh-btn');
            const panel = document.getElementById('status-panel');
            btn.disabled = true;
            btn.textContent = 'Refreshing...';
            panel.innerHTML = renderPanel({{ loading: true }});
            try {{
                const resp = await fetch('/refresh', {{ method: 'POST' }});
                panel.innerHTML = renderPanel(await resp.json());
            }} catch (err) {{
                panel.innerHTML = renderPanel({{ error: String(err) }});
            }} finally {{
                btn.disabled = false;
                btn.textContent = 'Refresh Status';
            }}
        }}
    </script>
</head>
<body>
    <h1>Statusboard</h1>
    <p class="subtitle">Minimal full-stack boilerplate</p>
    <div class="card">
        <h2>Backend API Status</h2>
        <div id="status-panel">{panel}</div>
    </div>
    <div class="card">
        <h2>Getting Started</h2>
        <ol>
            <li>Backend runs on <code>http://localhost:3001/api/v1</code></li>
            <li>Frontend runs on <code>http://localhost:3000</code></li>
            <li>Use the typed client from <code>crates/api-client</code> to call the backend</li>
        </ol>
    </div>
    <button id="refresh-btn" onclick="refreshStatus()">Refresh Status</button>
</body>
</html>"#,
        panel = render_panel(view),
    )
}
