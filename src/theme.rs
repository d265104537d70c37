//! Page-wide palette, gradients and animations shared by every section.

use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --background: #fdfbff;
                --foreground: #1f1535;
                --card: #ffffff;
                --muted: #f3f0fa;
                --muted-foreground: #6b6280;
                --border: #e6e0f3;
                --primary: #8b3dff;
                --primary-soft: rgba(139, 61, 255, 0.3);
                --primary-faint: rgba(139, 61, 255, 0.08);
                --secondary: #ff5c8a;
                --accent: #14b8c4;
                --accent-faint: rgba(20, 184, 196, 0.06);
                --accent-glow: #7ff3ff;
                --success: #16a34a;
                --success-soft: rgba(22, 163, 74, 0.3);
                --warning: #f59e0b;
                --warning-soft: rgba(245, 158, 11, 0.3);
                --destructive: #dc2626;
                --gradient-primary: linear-gradient(135deg, #8b3dff, #c026d3);
                --gradient-secondary: linear-gradient(135deg, #ff5c8a, #f97316);
                --gradient-accent: linear-gradient(135deg, #14b8c4, #6366f1);
                --gradient-success: linear-gradient(135deg, #22c55e, #14b8a6);
                --gradient-warning: linear-gradient(135deg, #f59e0b, #ef4444);
                --gradient-hero: linear-gradient(135deg, #4c1d95, #be185d, #0e7490);
            }

            * {
                box-sizing: border-box;
                margin: 0;
            }

            html {
                scroll-behavior: smooth;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                background: var(--background);
                color: var(--foreground);
                overflow-x: hidden;
            }

            .page {
                min-height: 100vh;
            }

            .container {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1.5rem;
            }

            .hidden {
                display: none;
            }

            .center {
                text-align: center;
            }

            .muted {
                color: var(--muted-foreground);
            }

            .small {
                font-size: 0.875rem;
            }

            .tiny {
                font-size: 0.75rem;
            }

            .glass-card {
                background: rgba(255, 255, 255, 0.7);
                backdrop-filter: blur(12px);
                border: 1px solid rgba(255, 255, 255, 0.3);
                border-radius: 1.5rem;
                box-shadow: 0 8px 32px rgba(31, 21, 53, 0.08);
            }

            .gradient-primary {
                background: var(--gradient-primary);
            }

            .gradient-secondary {
                background: var(--gradient-secondary);
            }

            .gradient-accent {
                background: var(--gradient-accent);
            }

            .gradient-success {
                background: var(--gradient-success);
            }

            .gradient-warning {
                background: var(--gradient-warning);
            }

            .text-gradient-primary,
            .text-gradient-secondary,
            .text-gradient-accent {
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .text-gradient-primary {
                background-image: var(--gradient-primary);
            }

            .text-gradient-secondary {
                background-image: var(--gradient-secondary);
            }

            .text-gradient-accent {
                background-image: var(--gradient-accent);
            }

            .tone-accent {
                color: var(--accent-glow);
            }

            .tone-secondary {
                color: #ffb3c8;
            }

            .tone-success {
                color: #86efac;
            }

            .section-header {
                text-align: center;
                margin-bottom: 4rem;
            }

            .section-pill {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.5rem 1rem;
                margin-bottom: 1.5rem;
                border-radius: 9999px;
                color: #fff;
                font-weight: 500;
            }

            .section-title {
                font-size: clamp(2.5rem, 6vw, 3.75rem);
                font-weight: 700;
                margin-bottom: 1rem;
            }

            .section-lead {
                font-size: 1.25rem;
                color: var(--muted-foreground);
                max-width: 42rem;
                margin: 0 auto;
            }

            .fade-in-up {
                animation: fade-in-up 0.8s ease-out both;
            }

            .float {
                display: inline-block;
                animation: float 6s ease-in-out infinite;
            }

            .pulse {
                animation: pulse 2s ease-in-out infinite;
            }

            .pulse-glow {
                animation: pulse-glow 2s ease-in-out infinite;
            }

            .spin {
                display: inline-block;
                animation: spin 1s linear infinite;
            }

            @keyframes fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(30px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            @keyframes float {
                0%, 100% {
                    transform: translateY(0);
                }
                50% {
                    transform: translateY(-12px);
                }
            }

            @keyframes pulse {
                0%, 100% {
                    opacity: 1;
                }
                50% {
                    opacity: 0.5;
                }
            }

            @keyframes pulse-glow {
                0%, 100% {
                    box-shadow: 0 0 20px rgba(139, 61, 255, 0.4);
                }
                50% {
                    box-shadow: 0 0 40px rgba(139, 61, 255, 0.7);
                }
            }

            @keyframes spin {
                to {
                    transform: rotate(360deg);
                }
            }
        "#)} />
    }
}
