pub const SIDEBAR_STYLES: &str = r#"
/* Panel */
.sidebar-panel {
    display: flex;
    flex-direction: column;
    width: 400px;
    height: 100%;
    background: var(--chat-bg, #0f172a);
    border-left: 1px solid var(--border-color, #334155);
    overflow: hidden;
}

/* Header */
.sidebar-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    background: var(--chat-header-bg, #1e293b);
    border-bottom: 1px solid var(--border-color, #334155);
    flex-shrink: 0;
}

.sidebar-title {
    margin: 0;
    font-size: 1.05rem;
    font-weight: 600;
    color: var(--text-primary, #f8fafc);
}

/* Language selector */
.language-selector {
    position: relative;
}

.language-button {
    display: flex;
    align-items: center;
    gap: 0.4rem;
    padding: 0.3rem 0.75rem;
    font-size: 0.8rem;
    font-weight: 500;
    color: var(--text-primary, #e2e8f0);
    background: var(--window-bg, #1f2937);
    border: 1px solid var(--border-color, #334155);
    border-radius: 999px;
    cursor: pointer;
}

.language-button:hover {
    background: #273549;
}

.language-globe {
    font-size: 0.9rem;
}

.language-overlay {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    z-index: 10;
}

.language-menu {
    position: absolute;
    right: 0;
    top: calc(100% + 0.5rem);
    width: 12rem;
    padding: 0.4rem 0;
    background: var(--window-bg, #1f2937);
    border: 1px solid var(--border-color, #334155);
    border-radius: 0.5rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.45);
    z-index: 20;
}

.language-option {
    display: block;
    width: 100%;
    padding: 0.45rem 1rem;
    text-align: left;
    font-size: 0.8rem;
    color: var(--text-primary, #e2e8f0);
    background: transparent;
    border: none;
    cursor: pointer;
}

.language-option:hover {
    background: #273549;
}

.language-option.active {
    background: var(--accent-bg, #3b82f6);
    color: white;
}

/* Messages */
.messages-scroll-area {
    flex: 1;
    min-height: 0;
    overflow-y: auto;
    padding: 0.75rem 1rem;
}

.messages-list {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.empty-state {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.25rem;
    padding: 2.5rem 1rem;
    color: var(--text-secondary, #94a3b8);
    text-align: center;
}

.empty-icon {
    font-size: 1.75rem;
}

.message-row {
    display: flex;
}

.user-row {
    justify-content: flex-end;
}

.message-content {
    max-width: 85%;
}

.message-header {
    display: flex;
    align-items: baseline;
    gap: 0.4rem;
    margin-bottom: 0.15rem;
    font-size: 0.7rem;
    color: var(--text-secondary, #94a3b8);
}

.sender-name {
    font-weight: 600;
}

.pending-badge {
    font-style: italic;
}

.message-bubble {
    padding: 0.5rem 0.75rem;
    border-radius: 0.75rem;
    font-size: 0.85rem;
    line-height: 1.4;
    white-space: pre-wrap;
    word-break: break-word;
}

.user-bubble {
    background: var(--accent-bg, #3b82f6);
    color: white;
}

.assistant-bubble {
    background: var(--window-bg, #1f2937);
    color: var(--text-primary, #e2e8f0);
}

.system-bubble {
    background: transparent;
    border: 1px dashed var(--border-color, #334155);
    color: var(--text-secondary, #94a3b8);
}

/* Typing indicator */
.typing-indicator {
    display: flex;
    gap: 0.25rem;
    padding: 0.5rem 0.75rem;
}

.typing-indicator span {
    width: 0.4rem;
    height: 0.4rem;
    border-radius: 50%;
    background: var(--text-secondary, #94a3b8);
    animation: typing-bounce 1.2s infinite ease-in-out;
}

.typing-indicator span:nth-child(2) {
    animation-delay: 0.15s;
}

.typing-indicator span:nth-child(3) {
    animation-delay: 0.3s;
}

@keyframes typing-bounce {
    0%, 60%, 100% { transform: translateY(0); opacity: 0.4; }
    30% { transform: translateY(-0.25rem); opacity: 1; }
}

/* Footer: speech row + input */
.sidebar-footer {
    flex-shrink: 0;
    padding: 0.5rem 1rem 0.75rem 1rem;
    border-top: 1px solid var(--border-color, #334155);
}

.speech-row {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    margin-bottom: 0.6rem;
}

.speech-bars {
    display: flex;
    align-items: flex-end;
    gap: 0.2rem;
    height: 1.1rem;
}

.speech-bars span {
    width: 0.25rem;
    background: var(--success-bg, #10b981);
    border-radius: 0.1rem;
    animation: speech-bounce 0.9s infinite ease-in-out;
}

.speech-bars span:nth-child(1) { animation-delay: 0s; }
.speech-bars span:nth-child(2) { animation-delay: 0.2s; }
.speech-bars span:nth-child(3) { animation-delay: 0.4s; }
.speech-bars span:nth-child(4) { animation-delay: 0.1s; }

@keyframes speech-bounce {
    0%, 100% { height: 0.3rem; }
    50% { height: 1.1rem; }
}

.stop-speech-button {
    display: flex;
    align-items: center;
    gap: 0.3rem;
    padding: 0.3rem 0.8rem;
    font-size: 0.72rem;
    font-weight: 600;
    color: white;
    background: #dc2626;
    border: none;
    border-radius: 999px;
    cursor: pointer;
}

.stop-speech-button:hover {
    background: #b91c1c;
}

.stop-square {
    font-size: 0.6rem;
}

/* Input */
.input-wrapper {
    display: flex;
    align-items: flex-end;
    gap: 0.5rem;
}

.chat-textarea {
    flex: 1;
    padding: 0.5rem 0.75rem;
    background: var(--input-bg, #1f2937);
    color: var(--text-primary, #f8fafc);
    border: 1px solid var(--border-color, #334155);
    border-radius: 0.5rem;
    font-size: 0.85rem;
    font-family: inherit;
    resize: none;
    outline: none;
}

.chat-textarea:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}

.send-button {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 2.25rem;
    height: 2.25rem;
    background: var(--accent-bg, #3b82f6);
    color: white;
    border: none;
    border-radius: 0.5rem;
    cursor: pointer;
    flex-shrink: 0;
}

.send-button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.spinner {
    animation: spin 1s linear infinite;
}

@keyframes spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

.input-hint {
    margin-top: 0.35rem;
    font-size: 0.68rem;
    color: var(--text-secondary, #94a3b8);
}
"#;
