//! Inline styles for the home page.

pub const HOME_STYLES: &str = r##"
:root {
    --primary: #1e1e1e;
    --accent: #2563eb;
    --bg: #ffffff;
    --bg-alt: #f5f5f4;
    --text: #1c1917;
    --text-muted: #78716c;
    --border: #e7e5e4;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    position: sticky;
    top: 0;
    padding: 1rem 2rem;
    background: rgba(255, 255, 255, 0.95);
    border-bottom: 1px solid var(--border);
    z-index: 10;
}

.logo { font-weight: 700; font-size: 1.25rem; color: var(--primary); text-decoration: none; }

/* Hero */
.hero {
    position: relative;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    min-height: 75vh;
    overflow: hidden;
    color: white;
    background: var(--primary);
}

.hero-media { position: absolute; inset: 0; display: flex; }
.hero-media img, .hero-media video { flex: 1; width: 100%; height: 100%; object-fit: cover; }

.hero-content {
    position: relative;
    padding: 3rem 2rem;
    background: linear-gradient(transparent, rgba(0, 0, 0, 0.6));
}

.hero-heading { font-size: 3rem; font-weight: 700; line-height: 1.1; }
.hero-byline { font-size: 1.25rem; opacity: 0.9; margin-top: 0.5rem; }
.hero-cta { display: inline-block; margin-top: 1.5rem; color: white; font-weight: 600; }

.hero-placeholder .hero-media { opacity: 0.4; }
.hero-placeholder .hero-content { animation: pulse 1.5s infinite; }

/* Sections */
.swimlane, .collections { padding: 3rem 2rem; }
.section-title { font-size: 1.5rem; font-weight: 600; margin-bottom: 1.5rem; }

.swimlane-track {
    display: grid;
    grid-auto-flow: column;
    grid-auto-columns: minmax(220px, 1fr);
    gap: 1.5rem;
    overflow-x: auto;
    scroll-snap-type: x mandatory;
}

.product-card, .collection-card {
    position: relative;
    display: block;
    color: inherit;
    text-decoration: none;
    scroll-snap-align: start;
}

.card-image { width: 100%; aspect-ratio: 4 / 5; object-fit: cover; background: var(--bg-alt); border-radius: 4px; }
.card-title { font-size: 1rem; font-weight: 500; margin-top: 0.75rem; }
.card-price { color: var(--text-muted); }
.card-compare { margin-left: 0.5rem; }
.card-label {
    position: absolute;
    top: 0.75rem;
    right: 0.75rem;
    padding: 0.125rem 0.5rem;
    background: white;
    color: #dc2626;
    font-size: 0.75rem;
    font-weight: 600;
}

.collections-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.5rem;
}

.collection-card .card-image { aspect-ratio: 3 / 2; }

.section-error { padding: 2rem; color: var(--text-muted); text-align: center; }

.site-footer {
    padding: 2rem;
    background: var(--primary);
    color: white;
    font-size: 0.875rem;
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}

@media (max-width: 768px) {
    .hero-heading { font-size: 2rem; }
    .swimlane, .collections { padding: 2rem 1rem; }
}
"##;
