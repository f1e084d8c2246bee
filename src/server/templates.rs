//! HTML templates for the web interface.

/// Base HTML template shared by all pages.
pub fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Bondcheck</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header id="main-header">
        <nav>
            <a href="/" class="logo">Bondcheck</a>
            <a href="/health">health</a>
        </nav>
    </header>
    <main>
        <h1>{}</h1>
        {}
    </main>
    <script src="/static/app.js"></script>
</body>
</html>"#,
        title, title, content
    )
}

/// Render the upload page.
pub fn upload_page() -> String {
    let content = r#"
    <p class="tagline">Check your prize bonds instantly</p>
    <div class="card upload-card">
        <div class="field">
            <label for="user-file">Your Bond List</label>
            <span class="hint">Accepted formats: .txt, .xlsx, .xls</span>
            <input type="file" id="user-file" accept=".txt,.xlsx,.xls">
            <div class="file-selected" id="user-file-selected" hidden></div>
        </div>
        <div class="separator"><span>AND</span></div>
        <div class="field">
            <label for="draw-file">Prize Bond Draw File</label>
            <span class="hint">Accepted formats: .txt, .xlsx, .xls, .pdf</span>
            <input type="file" id="draw-file" accept=".txt,.xlsx,.xls,.pdf">
            <div class="file-selected" id="draw-file-selected" hidden></div>
        </div>
        <div class="error-banner" id="error-banner" hidden></div>
        <button id="check-button" type="button">Check Results</button>
    </div>
    <div class="card results-card" id="results" hidden>
        <h2>Results Summary</h2>
        <div class="summary">
            <div class="stat">
                <div class="stat-value" id="matched-count">0</div>
                <div class="stat-label">Matched Bonds</div>
            </div>
            <div class="stat">
                <div class="stat-value" id="total-count">0</div>
                <div class="stat-label">Total Bonds</div>
            </div>
        </div>
        <div class="success-rate" id="success-rate" hidden></div>
        <h3 id="winners-heading" hidden>Winning Bonds</h3>
        <ol class="match-list" id="match-list"></ol>
        <div class="no-matches" id="no-matches" hidden>
            <p>No matching bonds found in your list.</p>
            <p class="muted">Better luck next time!</p>
        </div>
    </div>
    "#;

    base_template("Prize Bond Checker", content)
}

/// Stylesheet, embedded at compile time.
pub const CSS: &str = include_str!("styles.css");

/// Upload page script, embedded at compile time.
pub const JS: &str = include_str!("app.js");
