use crate::models::WidgetView;

pub fn render_index(view: &WidgetView) -> String {
    INDEX_HTML
        .replace("{{ROOT_CLASS}}", if view.dark_mode { "dark" } else { "" })
        .replace("{{COUNT}}", &view.count.to_string())
        .replace("{{LOOP_ACTIVE}}", if view.loop_enabled { " active" } else { "" })
        .replace("{{LOOP_HIDDEN}}", if view.loop_enabled { "" } else { " hidden" })
        .replace("{{LOOP_MAX}}", &view.loop_max.to_string())
        .replace("{{SOUND_ON}}", if view.sound_enabled { " sound-on" } else { "" })
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en" class="{{ROOT_CLASS}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tap Counter</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --muted: #8b857d;
      --accent: #ff6b4a;
      --chip: rgba(47, 72, 88, 0.08);
    }

    :root.dark {
      --bg: #16181d;
      --ink: #f1ede4;
      --muted: #8a8f99;
      --accent: #ff8a6e;
      --chip: rgba(255, 255, 255, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      transition: background 200ms ease, color 200ms ease;
    }

    #app {
      min-height: 100vh;
      display: grid;
      place-items: center;
      cursor: pointer;
      user-select: none;
      -webkit-tap-highlight-color: transparent;
    }

    #counter {
      font-size: clamp(6rem, 28vw, 16rem);
      font-weight: 600;
      font-variant-numeric: tabular-nums;
      line-height: 1;
    }

    #counter.pulse {
      animation: pulse 150ms ease;
    }

    .controls {
      position: fixed;
      top: 18px;
      right: 18px;
      display: flex;
      align-items: center;
      gap: 8px;
      padding: 6px;
      border-radius: 999px;
      background: var(--chip);
      cursor: default;
    }

    .controls button {
      appearance: none;
      border: none;
      background: transparent;
      color: var(--muted);
      border-radius: 999px;
      width: 40px;
      height: 40px;
      font-size: 1.1rem;
      cursor: pointer;
    }

    .controls button:active {
      transform: scale(0.94);
    }

    .repeat-icon.active,
    #soundBtn.sound-on {
      color: var(--accent);
    }

    #loopMaxInput {
      width: 64px;
      height: 32px;
      border-radius: 999px;
      border: 1px solid var(--muted);
      background: transparent;
      color: var(--ink);
      text-align: center;
      font: inherit;
    }

    .hidden {
      display: none;
    }

    .hint {
      position: fixed;
      bottom: 18px;
      left: 0;
      right: 0;
      text-align: center;
      color: var(--muted);
      font-size: 0.9rem;
    }

    @keyframes pulse {
      from {
        transform: scale(1.08);
      }
      to {
        transform: scale(1);
      }
    }
  </style>
</head>
<body>
  <main id="app">
    <div class="controls">
      <button id="darkModeBtn" type="button" aria-label="Toggle dark mode">&#9680;</button>
      <button id="soundBtn" class="{{SOUND_ON}}" type="button" aria-label="Toggle sound">&#9835;</button>
      <button id="loopBtn" type="button" aria-label="Toggle loop"><span class="repeat-icon{{LOOP_ACTIVE}}">&#8635;</span></button>
      <input id="loopMaxInput" class="{{LOOP_HIDDEN}}" type="number" min="1" inputmode="numeric" value="{{LOOP_MAX}}" aria-label="Loop max" />
      <button id="resetBtn" type="button" aria-label="Reset">&#10227;</button>
    </div>
    <span id="counter">{{COUNT}}</span>
    <p class="hint">Tap anywhere or press space.</p>
  </main>

  <script>
    const app = document.getElementById('app');
    const counterEl = document.getElementById('counter');
    const darkModeBtn = document.getElementById('darkModeBtn');
    const soundBtn = document.getElementById('soundBtn');
    const loopBtn = document.getElementById('loopBtn');
    const loopMaxInput = document.getElementById('loopMaxInput');
    const resetBtn = document.getElementById('resetBtn');
    const repeatIcon = loopBtn.querySelector('.repeat-icon');

    let audioCtx = null;

    const render = (state) => {
      counterEl.textContent = state.count;
      document.documentElement.classList.toggle('dark', state.dark_mode);
      repeatIcon.classList.toggle('active', state.loop_enabled);
      loopMaxInput.classList.toggle('hidden', !state.loop_enabled);
      soundBtn.classList.toggle('sound-on', state.sound_enabled);
      if (document.activeElement !== loopMaxInput) {
        loopMaxInput.value = state.loop_max;
      }
    };

    const pulse = () => {
      counterEl.classList.remove('pulse');
      void counterEl.offsetWidth;
      counterEl.classList.add('pulse');
    };

    const playClick = (tone) => {
      const Ctx = window.AudioContext || window.webkitAudioContext;
      if (!audioCtx) {
        audioCtx = new Ctx();
      }
      const seconds = tone.duration_ms / 1000;
      const now = audioCtx.currentTime;
      const osc = audioCtx.createOscillator();
      const gain = audioCtx.createGain();
      osc.type = 'sine';
      osc.frequency.value = tone.frequency_hz;
      gain.gain.setValueAtTime(tone.start_gain, now);
      gain.gain.exponentialRampToValueAtTime(tone.end_gain, now + seconds);
      osc.connect(gain);
      gain.connect(audioCtx.destination);
      osc.start(now);
      osc.stop(now + seconds);
    };

    const play = (effect) => {
      try {
        if (effect.kind === 'pulse') {
          pulse();
        } else if (effect.kind === 'vibrate') {
          navigator.vibrate(effect.duration_ms);
        } else if (effect.kind === 'click') {
          playClick(effect);
        }
      } catch (_) {
        // feedback is optional
      }
    };

    const apply = (body) => {
      render(body.state);
      body.effects.forEach(play);
    };

    const send = async (method, path, payload) => {
      const init = { method };
      if (payload !== undefined) {
        init.headers = { 'content-type': 'application/json' };
        init.body = JSON.stringify(payload);
      }
      const res = await fetch(path, init);
      if (!res.ok) {
        throw new Error(await res.text());
      }
      apply(await res.json());
    };

    // One request in flight at a time, so the server applies events and the
    // page renders responses in the order the events happened.
    let queue = Promise.resolve();

    const fire = (method, path, payload) => {
      queue = queue
        .then(() => send(method, path, payload))
        .catch((err) => console.error(err));
    };

    counterEl.addEventListener('animationend', () => counterEl.classList.remove('pulse'));

    app.addEventListener('click', (e) => {
      if (e.target.closest('.controls')) return;
      fire('POST', '/api/increment');
    });

    darkModeBtn.addEventListener('click', (e) => {
      e.stopPropagation();
      fire('POST', '/api/dark-mode/toggle');
    });

    soundBtn.addEventListener('click', (e) => {
      e.stopPropagation();
      fire('POST', '/api/sound/toggle');
    });

    loopBtn.addEventListener('click', (e) => {
      e.stopPropagation();
      fire('POST', '/api/loop/toggle');
    });

    resetBtn.addEventListener('click', (e) => {
      e.stopPropagation();
      fire('POST', '/api/reset');
    });

    loopMaxInput.addEventListener('click', (e) => e.stopPropagation());

    const sendLoopMax = (e) => fire('PUT', '/api/loop/max', { value: e.target.value });
    loopMaxInput.addEventListener('input', sendLoopMax);
    loopMaxInput.addEventListener('change', sendLoopMax);

    window.addEventListener('keydown', (e) => {
      if (e.code === 'Space') {
        e.preventDefault();
        fire('POST', '/api/increment');
      }
    });

    fire('POST', '/api/session', {
      system_prefers_dark: window.matchMedia('(prefers-color-scheme: dark)').matches,
      supports_vibration: typeof navigator.vibrate === 'function',
      supports_audio: Boolean(window.AudioContext || window.webkitAudioContext)
    });
  </script>
</body>
</html>
"#;
