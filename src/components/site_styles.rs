use yew::prelude::*;

/// Stylesheet for the whole site. Reveal classes match the `RevealConfig`
/// defaults; pages that rename them in the motion config ship their own rules.
pub const SITE_CSS: &str = r#"
    :root {
        --orbit-dark: #0f0f23;
        --orbit-blue: #12163a;
        --orbit-slate: #1b1f3b;
        --orbit-cyan: #00e5ff;
        --orbit-purple: #8b5cf6;
        --text: #f3f4f6;
        --muted: #9ca3af;
        --nav-height: 72px;
    }
    *, *::before, *::after { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: var(--orbit-dark);
        color: var(--text);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        line-height: 1.6;
    }
    a { color: var(--orbit-cyan); text-decoration: none; }
    img { max-width: 100%; display: block; }

    .gradient-text {
        background: linear-gradient(90deg, var(--orbit-cyan), var(--orbit-purple));
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .skip-link {
        position: absolute;
        left: -9999px;
        top: 0;
        z-index: 100;
        padding: 8px 16px;
        background: var(--orbit-cyan);
        color: var(--orbit-dark);
    }
    .skip-link:focus { left: 16px; top: 16px; }

    .orbit-btn, .orbit-btn-outline {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        padding: 12px 28px;
        border-radius: 12px;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.3s ease, box-shadow 0.3s ease, background 0.3s ease;
    }
    .orbit-btn {
        background: linear-gradient(90deg, var(--orbit-cyan), var(--orbit-purple));
        color: #fff;
        border: none;
    }
    .orbit-btn:hover { transform: scale(1.05); box-shadow: 0 8px 24px rgba(0, 229, 255, 0.25); }
    .orbit-btn:disabled { opacity: 0.6; cursor: wait; transform: none; }
    .orbit-btn-outline {
        background: transparent;
        color: var(--orbit-cyan);
        border: 1px solid var(--orbit-cyan);
    }
    .orbit-btn-outline:hover { background: rgba(0, 229, 255, 0.1); }

    /* Navbar */
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 40;
        background: transparent;
        transform: translateY(0);
        transition: transform 0.3s ease, background 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(15, 15, 35, 0.92);
        backdrop-filter: blur(12px);
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.35);
    }
    .top-nav.nav-hidden { transform: translateY(-100%); }
    .nav-progress {
        position: absolute;
        left: 0;
        bottom: 0;
        height: 2px;
        background: linear-gradient(90deg, var(--orbit-cyan), var(--orbit-purple));
        transition: width 0.1s linear;
    }
    .nav-content {
        max-width: 1200px;
        height: var(--nav-height);
        margin: 0 auto;
        padding: 0 24px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo { display: flex; align-items: center; gap: 10px; font-size: 1.4rem; font-weight: 700; }
    .nav-logo img { height: 40px; width: auto; }
    .nav-right { display: flex; align-items: center; gap: 8px; }
    .nav-link {
        color: #d1d5db;
        background: none;
        border: none;
        font: inherit;
        font-size: 0.95rem;
        padding: 8px 12px;
        cursor: pointer;
    }
    .nav-link:hover { color: var(--orbit-cyan); }
    .nav-dropdown { position: relative; }
    .nav-dropdown-menu {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        min-width: 240px;
        padding: 8px 0;
        background: var(--orbit-slate);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 12px;
    }
    .nav-dropdown.open .nav-dropdown-menu { display: block; }
    .nav-dropdown-item { display: block; padding: 8px 16px; color: #d1d5db; }
    .nav-dropdown-item:hover { background: rgba(0, 229, 255, 0.08); color: var(--orbit-cyan); }
    .nav-cta { padding: 8px 20px; }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span { width: 24px; height: 2px; background: var(--text); }

    /* Page scaffolding */
    main { min-height: 100vh; }
    .section-inner, .page-hero, .services-list, .pillars-grid, .about-story, .service-detail, .details-stack {
        max-width: 1200px;
        margin: 0 auto;
        padding-left: 24px;
        padding-right: 24px;
    }
    .page-hero { padding-top: calc(var(--nav-height) + 64px); padding-bottom: 48px; text-align: center; }
    .page-hero h1 { font-size: clamp(2.2rem, 5vw, 3.5rem); margin: 0 0 16px; }
    .page-hero p { color: #d1d5db; max-width: 720px; margin: 0 auto; font-size: 1.15rem; }
    .title-rule { width: 96px; height: 4px; margin: 16px auto 0; background: linear-gradient(90deg, var(--orbit-cyan), var(--orbit-purple)); }
    .section-title { font-size: clamp(2rem, 4vw, 3rem); text-align: center; margin: 0 0 16px; }
    .section-subtitle { color: #d1d5db; text-align: center; max-width: 720px; margin: 0 auto 48px; font-size: 1.15rem; }
    .section-badge {
        display: table;
        margin: 0 auto 24px;
        padding: 10px 24px;
        border-radius: 999px;
        background: rgba(0, 229, 255, 0.1);
        border: 1px solid rgba(0, 229, 255, 0.3);
        color: var(--orbit-cyan);
        font-size: 0.9rem;
        font-weight: 600;
    }

    /* Hero */
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background:
            radial-gradient(circle at 30% 20%, rgba(0, 229, 255, 0.15), transparent 50%),
            radial-gradient(circle at 70% 80%, rgba(139, 92, 246, 0.15), transparent 50%);
    }
    .hero-content { position: relative; max-width: 860px; padding: 0 24px; }
    .hero-content h1 { font-size: clamp(2.5rem, 7vw, 4.5rem); margin: 0 0 24px; }
    .hero-subtitle { font-size: 1.25rem; color: #d1d5db; margin-bottom: 32px; }
    .hero-cta-group { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; }

    /* Services */
    .services-section, .why-section, .tech-section, .about-section, .portfolio-section, .contact-section {
        padding: 96px 0;
    }
    .services-section { background: linear-gradient(135deg, var(--orbit-dark), var(--orbit-blue)); }
    .services-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; }
    .service-card {
        padding: 32px;
        border-radius: 20px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        text-align: center;
        transition: border-color 0.3s ease, transform 0.3s ease;
    }
    .service-card:hover { border-color: rgba(0, 229, 255, 0.5); }
    .service-icon { font-size: 2rem; margin-bottom: 16px; }
    .service-card p { color: var(--muted); }
    .service-actions { display: flex; flex-wrap: wrap; gap: 12px; justify-content: center; }
    .service-link { font-weight: 600; }
    .services-carousel { display: none; }
    .carousel-viewport { position: relative; overflow: hidden; border-radius: 20px; }
    .carousel-track { display: flex; transition: transform 0.5s ease-in-out; }
    .carousel-slide { flex: 0 0 100%; padding: 0 16px; }
    .carousel-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        width: 40px;
        height: 40px;
        border-radius: 50%;
        background: rgba(15, 15, 35, 0.8);
        border: 1px solid rgba(0, 229, 255, 0.3);
        color: var(--orbit-cyan);
        font-size: 1.5rem;
        cursor: pointer;
    }
    .carousel-prev { left: 16px; }
    .carousel-next { right: 16px; }
    .carousel-dots { display: flex; justify-content: center; gap: 8px; margin-top: 24px; }
    .carousel-dot {
        width: 12px;
        height: 12px;
        padding: 0;
        border-radius: 50%;
        border: none;
        background: rgba(255, 255, 255, 0.3);
        cursor: pointer;
        transition: background 0.3s ease, transform 0.3s ease;
    }
    .carousel-dot.active { background: var(--orbit-cyan); transform: scale(1.25); }
    .services-list { display: grid; gap: 48px; padding-bottom: 96px; }
    .service-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 32px;
        align-items: center;
        padding: 24px;
        border-radius: 20px;
        background: rgba(255, 255, 255, 0.04);
    }
    .service-row-copy p { color: #d1d5db; }
    .service-row img { border-radius: 16px; aspect-ratio: 16 / 10; object-fit: cover; width: 100%; }
    .service-detail { display: grid; gap: 32px; padding-bottom: 96px; font-size: 1.1rem; color: #d1d5db; }
    .service-detail img { border-radius: 20px; }

    /* Why choose us */
    .why-section { background: linear-gradient(180deg, var(--orbit-slate), var(--orbit-dark), var(--orbit-blue)); }
    .why-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; }
    .why-features { display: grid; gap: 16px; }
    .why-card {
        padding: 24px;
        border-radius: 16px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(27, 31, 59, 0.3);
        cursor: pointer;
        transition: background 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease;
    }
    .why-card.active {
        background: rgba(18, 22, 58, 0.6);
        border-color: rgba(0, 229, 255, 0.5);
        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.35);
    }
    .why-card-head { display: flex; align-items: center; gap: 16px; }
    .why-card-head h3 { flex: 1; margin: 0; }
    .why-icon { font-size: 1.5rem; }
    .why-metric { text-align: right; }
    .why-metric strong { display: block; font-size: 1.5rem; color: var(--muted); }
    .why-card.active .why-metric strong { color: var(--orbit-cyan); }
    .why-metric span { font-size: 0.75rem; color: var(--muted); }
    .why-card p { color: var(--muted); margin-bottom: 0; }
    .why-benefits { list-style: none; padding: 0; margin: 12px 0 0; display: grid; gap: 6px; color: #d1d5db; }
    .why-side { display: grid; gap: 32px; align-content: start; }
    .stats-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
    .stat-card {
        padding: 24px;
        border-radius: 16px;
        text-align: center;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .stat-icon { font-size: 1.5rem; margin-bottom: 8px; }
    .stat-card strong { display: block; font-size: 2rem; }
    .stat-card span { color: var(--muted); font-size: 0.9rem; }
    .value-card {
        padding: 32px;
        border-radius: 20px;
        background: linear-gradient(135deg, rgba(0, 229, 255, 0.1), rgba(139, 92, 246, 0.1));
        border: 1px solid rgba(0, 229, 255, 0.2);
    }
    .value-card p { color: #d1d5db; }
    .why-cta { display: flex; justify-content: center; gap: 16px; margin-top: 48px; color: #d1d5db; }

    /* Technologies */
    .tech-section { background: linear-gradient(135deg, var(--orbit-slate), var(--orbit-dark), var(--orbit-blue)); }
    .tech-rows { display: grid; gap: 12px; }
    .tech-row { display: grid; grid-template-columns: repeat(var(--tech-columns), 1fr); gap: 12px; }
    .tech-item {
        display: flex;
        align-items: center;
        gap: 12px;
        min-width: 0;
        padding: 12px 16px;
        border-radius: 16px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        transition: border-color 0.5s ease, background 0.5s ease;
    }
    .tech-item:hover { border-color: rgba(0, 229, 255, 0.5); background: rgba(255, 255, 255, 0.15); }
    .tech-item img { width: 32px; height: 32px; object-fit: contain; flex-shrink: 0; }
    .tech-item span { white-space: nowrap; overflow: hidden; text-overflow: ellipsis; font-size: 0.9rem; }

    /* About */
    .about-section { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; max-width: 1200px; margin: 0 auto; padding-left: 24px; padding-right: 24px; }
    .about-copy p, .about-story p { color: #d1d5db; }
    .about-copy .section-title { text-align: left; }
    .timeline { list-style: none; margin: 0; padding: 0 0 0 24px; border-left: 2px solid rgba(0, 229, 255, 0.3); display: grid; gap: 24px; }
    .timeline-item h3 { margin: 0 0 4px; color: var(--orbit-cyan); }
    .timeline-item p { margin: 0; color: var(--muted); }
    .pillars-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; padding-bottom: 64px; }
    .pillar-card { padding: 32px; border-radius: 20px; background: rgba(255, 255, 255, 0.05); text-align: center; }
    .pillar-icon { font-size: 2rem; }
    .about-story { max-width: 860px; padding-bottom: 96px; font-size: 1.1rem; }

    /* Portfolio */
    .portfolio-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; align-items: start; }
    .portfolio-card { position: relative; overflow: hidden; border-radius: 20px; cursor: pointer; transition: transform 0.3s ease; }
    .portfolio-card:hover { transform: scale(1.05); }
    .portfolio-card img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
    .portfolio-overlay { position: absolute; inset: 0; background: linear-gradient(135deg, rgba(37, 99, 235, 0.8), rgba(139, 92, 246, 0.8)); }
    .portfolio-content { position: absolute; inset: 0; padding: 32px; display: flex; flex-direction: column; justify-content: space-between; }
    .portfolio-category { align-self: flex-start; padding: 4px 12px; border-radius: 999px; background: rgba(255, 255, 255, 0.2); font-size: 0.85rem; }
    .portfolio-content h3 { margin: 0; font-size: 1.5rem; }

    /* Contact */
    .contact-form-section { padding: 0 0 96px; }
    .contact-layout { display: grid; grid-template-columns: 1fr 2fr; gap: 48px; max-width: 1200px; margin: 0 auto; padding: 0 24px; }
    .contact-details, .contact-cards { display: grid; gap: 24px; align-content: start; }
    .contact-detail, .contact-card { padding: 24px; border-radius: 16px; background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1); }
    .contact-detail h4 { margin: 0 0 8px; }
    .contact-detail p { margin: 0; color: var(--muted); }
    .contact-form { display: grid; gap: 20px; padding: 32px; border-radius: 20px; background: rgba(255, 255, 255, 0.05); }
    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }
    .form-field { display: grid; gap: 8px; }
    .form-field label { font-size: 0.9rem; font-weight: 600; color: #d1d5db; }
    .form-field input, .form-field textarea {
        padding: 12px 16px;
        border-radius: 12px;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(255, 255, 255, 0.05);
        color: var(--text);
        font: inherit;
    }
    .form-field input:focus, .form-field textarea:focus { outline: none; border-color: var(--orbit-cyan); }
    .form-error { margin: 0; color: #f87171; font-size: 0.85rem; }
    .form-success { margin: 0; color: #34d399; text-align: center; }

    /* Details */
    .details-stack { display: grid; gap: 32px; padding-bottom: 96px; }
    .details-card { padding: 32px; border-radius: 20px; background: var(--orbit-slate); border: 1px solid rgba(255, 255, 255, 0.1); color: #d1d5db; }
    .details-card h2 { margin-top: 0; }
    .details-card h3 { color: var(--orbit-cyan); }
    .details-pair, .details-columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 32px; }
    .badge-grid { display: grid; grid-template-columns: repeat(6, 1fr); gap: 12px; }
    .tech-badge { padding: 8px; border-radius: 8px; text-align: center; background: rgba(0, 229, 255, 0.2); color: var(--orbit-cyan); border: 1px solid rgba(0, 229, 255, 0.3); }

    /* Footer */
    .site-footer { padding: 64px 24px 32px; background: #0a0a1a; border-top: 1px solid rgba(255, 255, 255, 0.08); }
    .footer-grid { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 48px; }
    .footer-logo { display: flex; align-items: center; gap: 10px; font-weight: 700; }
    .footer-logo img { height: 36px; width: auto; }
    .footer-brand p, .footer-contact p { color: var(--muted); }
    .footer-links ul { list-style: none; padding: 0; display: grid; gap: 8px; }
    .footer-links a { color: var(--muted); }
    .footer-links a:hover { color: var(--orbit-cyan); }
    .footer-copyright { max-width: 1200px; margin: 48px auto 0; padding-top: 24px; border-top: 1px solid rgba(255, 255, 255, 0.08); text-align: center; color: var(--muted); font-size: 0.9rem; }

    /* Loading screen */
    .loading-screen {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        background: var(--orbit-dark);
    }
    .loading-logo { width: 96px; height: auto; animation: orbit-pulse 1.5s ease-in-out infinite; }
    .loading-bar { width: 240px; height: 4px; border-radius: 2px; background: rgba(255, 255, 255, 0.1); overflow: hidden; }
    .loading-bar-fill { height: 100%; background: linear-gradient(90deg, var(--orbit-cyan), var(--orbit-purple)); transition: width 0.1s linear; }
    .loading-label { color: var(--muted); font-size: 0.9rem; }

    /* Floating buttons */
    .floating-contact { position: fixed; right: 24px; bottom: 96px; z-index: 30; display: flex; flex-direction: column; align-items: flex-end; gap: 12px; }
    .floating-contact-actions { display: flex; flex-direction: column; gap: 12px; opacity: 0; pointer-events: none; transform: translateY(12px); transition: opacity 0.3s ease, transform 0.3s ease; }
    .floating-contact-actions.open { opacity: 1; pointer-events: auto; transform: none; }
    .floating-contact-toggle, .floating-contact-whatsapp, .floating-contact-call, .scroll-to-top {
        width: 56px;
        height: 56px;
        border-radius: 50%;
        border: none;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-size: 1.4rem;
        cursor: pointer;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
    }
    .floating-contact-toggle { background: linear-gradient(135deg, var(--orbit-cyan), var(--orbit-purple)); }
    .floating-contact-whatsapp { background: #25d366; }
    .floating-contact-call { background: #2563eb; }
    .scroll-to-top { position: fixed; right: 24px; bottom: 24px; z-index: 30; background: var(--orbit-slate); border: 1px solid rgba(0, 229, 255, 0.4); color: var(--orbit-cyan); }
    .not-found-page { min-height: 80vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: var(--nav-height) 24px 0; }

    /* Scroll reveal */
    .service-flip-hidden {
        opacity: 0;
        transform: perspective(1000px) rotateY(-90deg);
    }
    .service-flip-visible, .service-flip-visible-alt {
        animation-duration: 0.8s;
        animation-timing-function: cubic-bezier(0.34, 1.56, 0.64, 1);
        animation-fill-mode: both;
        backface-visibility: hidden;
    }
    .service-flip-visible { animation-name: service-flip-in; }
    .service-flip-visible-alt { animation-name: service-flip-in-alt; }
    @keyframes service-flip-in {
        from { opacity: 0; transform: perspective(1000px) rotateY(-90deg); filter: blur(4px); }
        60% { opacity: 1; filter: blur(0); }
        to { opacity: 1; transform: perspective(1000px) rotateY(0); filter: none; }
    }
    @keyframes service-flip-in-alt {
        from { opacity: 0; transform: perspective(1000px) rotateY(90deg); filter: blur(4px); }
        60% { opacity: 1; filter: blur(0); }
        to { opacity: 1; transform: perspective(1000px) rotateY(0); filter: none; }
    }
    @keyframes orbit-pulse {
        0%, 100% { transform: scale(1); opacity: 1; }
        50% { transform: scale(1.08); opacity: 0.8; }
    }

    @media (max-width: 1023px) {
        .services-grid { display: none; }
        .services-carousel { display: block; }
        .why-grid, .about-section, .contact-layout { grid-template-columns: 1fr; }
        .tech-row { grid-template-columns: repeat(4, 1fr); }
        .pillars-grid, .portfolio-grid { grid-template-columns: 1fr 1fr; }
        .badge-grid { grid-template-columns: repeat(4, 1fr); }
    }
    @media (max-width: 767px) {
        .burger-menu { display: flex; }
        .nav-right {
            display: none;
            position: absolute;
            top: var(--nav-height);
            left: 0;
            right: 0;
            flex-direction: column;
            align-items: stretch;
            padding: 16px 24px;
            background: rgba(15, 15, 35, 0.97);
        }
        .nav-right.mobile-menu-open { display: flex; }
        .nav-dropdown-menu { position: static; }
        .tech-row { grid-template-columns: repeat(2, 1fr); }
        .pillars-grid, .portfolio-grid, .service-row, .form-row, .footer-grid, .stats-grid { grid-template-columns: 1fr; }
        .badge-grid { grid-template-columns: repeat(2, 1fr); }
    }
    @media (prefers-reduced-motion: reduce) {
        html { scroll-behavior: auto; }
        .service-flip-hidden { opacity: 1; transform: none; }
        .service-flip-visible, .service-flip-visible-alt { animation: none; }
        .top-nav, .carousel-track, .loading-logo { transition: none; animation: none; }
    }
"#;

#[function_component(SiteStyles)]
pub fn site_styles() -> Html {
    html! {
        <style>{SITE_CSS}</style>
    }
}
