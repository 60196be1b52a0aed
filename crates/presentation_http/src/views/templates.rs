//! Embedded page templates

pub const BASE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
    <link rel="stylesheet" href="/assets/app.css">
    <script src="/assets/app.js" defer></script>
</head>
<body>
<main>
    <h1>{{ title }}</h1>
{% block content %}{% endblock content %}
</main>
</body>
</html>
"#;

pub const LOGIN: &str = r#"{% extends "base.html" %}
{% block content %}
    <form class="login" method="post" action="/login">
        <label for="password">Enter Access Password</label>
        <input id="password" name="password" type="password" autocomplete="current-password" autofocus>
        <button type="submit">Login</button>
    </form>
{% if error %}
    <p class="error" role="alert">{{ error }}</p>
{% endif %}
{% endblock content %}
"#;

pub const ANALYZER: &str = r#"{% extends "base.html" %}
{% block content %}
    <p class="subtitle">Enter the property details below to get a deal breakdown.</p>
    <form class="deal" method="post" action="/analyze" data-busy-text="Crunching the numbers...">
        <div class="columns">
            <div class="column">
                <label for="after_repair_value">After Repair Value ($)</label>
                <input id="after_repair_value" name="after_repair_value" inputmode="numeric" value="{{ form.after_repair_value }}">
                <label for="estimated_repairs">Estimated Repairs ($)</label>
                <input id="estimated_repairs" name="estimated_repairs" inputmode="numeric" value="{{ form.estimated_repairs }}">
            </div>
            <div class="column">
                <label for="asking_price">Seller Asking Price ($)</label>
                <input id="asking_price" name="asking_price" inputmode="numeric" value="{{ form.asking_price }}">
                <label for="wholesale_fee">Your Wholesale Fee ($)</label>
                <input id="wholesale_fee" name="wholesale_fee" inputmode="numeric" value="{{ form.wholesale_fee }}">
            </div>
        </div>
        <label for="notes">Additional Property Notes (Condition, Location, etc.)</label>
        <textarea id="notes" name="notes" rows="5">{{ form.notes }}</textarea>
        <button type="submit">Analyze Deal</button>
        <p class="busy" hidden>Crunching the numbers...</p>
    </form>
{% if error %}
    <p class="error" role="alert">{{ error }}</p>
{% endif %}
{% if result_html %}
    <section class="result">
{{ result_html | safe }}
    </section>
{% endif %}
{% endblock content %}
"#;

pub const ERROR: &str = r#"{% extends "base.html" %}
{% block content %}
    <p class="error" role="alert">{{ message }}</p>
    <p><a href="/">Back</a></p>
{% endblock content %}
"#;

pub const APP_CSS: &str = r"body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    margin: 0;
    background: #fafafa;
    color: #1f2328;
}
main {
    max-width: 52rem;
    margin: 2rem auto;
    padding: 0 1rem;
}
label {
    display: block;
    margin-top: 0.75rem;
    font-weight: 600;
}
input, textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.5rem;
    font: inherit;
}
.columns {
    display: flex;
    gap: 1rem;
}
.column {
    flex: 1;
}
button {
    margin-top: 1rem;
    padding: 0.5rem 1.25rem;
    font: inherit;
}
.error {
    color: #b42318;
    background: #fef3f2;
    padding: 0.75rem;
    border-radius: 0.25rem;
}
.result {
    margin-top: 1.5rem;
    padding: 1rem;
    background: #fff;
    border: 1px solid #d0d7de;
    border-radius: 0.25rem;
}
";

pub const APP_JS: &str = r"document.addEventListener('DOMContentLoaded', () => {
    const form = document.querySelector('form.deal');
    if (!form) {
        return;
    }
    form.addEventListener('submit', () => {
        const button = form.querySelector('button[type=submit]');
        const busy = form.querySelector('.busy');
        if (button) {
            button.disabled = true;
        }
        if (busy) {
            busy.textContent = form.dataset.busyText || busy.textContent;
            busy.hidden = false;
        }
    });
});
";
