//! Browser client for the notes API, served as one static page.
//!
//! After every successful create, update or delete the page reloads the whole
//! list from `GET /notes` instead of patching its local copy.

use axum::response::Html;

pub async fn memo_page() -> Html<&'static str> {
    Html(MEMO_PAGE)
}

const MEMO_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Memo</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 0; background: #fafafa; color: #18181b; }
    main { display: flex; gap: 24px; max-width: 960px; margin: 0 auto; padding: 24px; }
    section { background: #fff; border: 1px solid #e4e4e7; border-radius: 12px; padding: 16px; }
    #list-pane { width: 33%; }
    #form-pane { flex: 1; }
    header { display: flex; justify-content: space-between; align-items: center; }
    ul { list-style: none; padding: 0; }
    li button { width: 100%; text-align: left; margin-bottom: 8px; padding: 12px; border: 1px solid #e4e4e7; border-radius: 8px; background: #fff; cursor: pointer; }
    li button.selected { border-color: #000; background: #f4f4f5; }
    .title, .preview { white-space: nowrap; overflow: hidden; text-overflow: ellipsis; margin: 0; }
    .preview { font-size: 12px; color: #71717a; margin-top: 4px; }
    input, textarea { width: 100%; box-sizing: border-box; padding: 8px 12px; margin-bottom: 12px; border: 1px solid #d4d4d8; border-radius: 6px; }
    .error { color: #dc2626; font-size: 14px; }
    .muted { color: #71717a; font-size: 14px; }
  </style>
</head>
<body>
<main>
  <section id="list-pane">
    <header>
      <h1>Memo</h1>
      <button id="new-btn" type="button">New</button>
    </header>
    <p id="list-status" class="muted">Loading...</p>
    <ul id="note-list"></ul>
  </section>
  <section id="form-pane">
    <h2 id="form-heading" class="muted">Create note</h2>
    <form id="note-form">
      <input id="title" placeholder="Title" maxlength="120" required />
      <textarea id="content" placeholder="Write your memo..." maxlength="5000" rows="12"></textarea>
      <p id="error" class="error" hidden></p>
      <button id="save-btn" type="submit">Create</button>
      <button id="delete-btn" type="button" hidden>Delete</button>
    </form>
  </section>
</main>
<script>
  const state = { notes: [], selectedId: null, loading: true, saving: false };
  const $ = (id) => document.getElementById(id);

  function showError(message) {
    $('error').textContent = message || '';
    $('error').hidden = !message;
  }

  function selectedNote() {
    return state.notes.find((n) => n.id === state.selectedId) || null;
  }

  function fillForm(note) {
    $('title').value = note ? note.title : '';
    $('content').value = note ? note.content : '';
  }

  function render() {
    const list = $('note-list');
    list.replaceChildren();
    if (state.loading) {
      $('list-status').textContent = 'Loading...';
      $('list-status').hidden = false;
    } else if (state.notes.length === 0) {
      $('list-status').textContent = 'No notes yet.';
      $('list-status').hidden = false;
    } else {
      $('list-status').hidden = true;
    }
    for (const note of state.notes) {
      const item = document.createElement('li');
      const button = document.createElement('button');
      button.type = 'button';
      if (note.id === state.selectedId) button.className = 'selected';
      const title = document.createElement('p');
      title.className = 'title';
      title.textContent = note.title;
      const preview = document.createElement('p');
      preview.className = 'preview';
      preview.textContent = note.content || '(empty)';
      button.append(title, preview);
      button.addEventListener('click', () => startEdit(note));
      item.append(button);
      list.append(item);
    }
    const selected = selectedNote();
    $('form-heading').textContent = selected ? 'Edit note' : 'Create note';
    $('save-btn').textContent = state.saving ? 'Saving...' : selected ? 'Update' : 'Create';
    $('save-btn').disabled = state.saving;
    $('delete-btn').hidden = !selected;
    $('delete-btn').disabled = state.saving;
  }

  async function requestJson(url, options, fallback) {
    const res = await fetch(url, { cache: 'no-store', ...options });
    let body = {};
    try { body = await res.json(); } catch (_) {}
    if (!res.ok) throw new Error(body.error || fallback);
    return body;
  }

  async function loadNotes() {
    state.loading = true;
    showError(null);
    render();
    try {
      const body = await requestJson('/notes', {}, 'Failed to load notes');
      state.notes = body.notes || [];
      if (!state.selectedId && state.notes[0]) {
        state.selectedId = state.notes[0].id;
        fillForm(state.notes[0]);
      }
    } catch (e) {
      showError(e.message);
    } finally {
      state.loading = false;
      render();
    }
  }

  function startCreate() {
    state.selectedId = null;
    fillForm(null);
    showError(null);
    render();
  }

  function startEdit(note) {
    state.selectedId = note.id;
    fillForm(note);
    showError(null);
    render();
  }

  async function onSubmit(event) {
    event.preventDefault();
    state.saving = true;
    showError(null);
    render();
    try {
      const updating = Boolean(state.selectedId);
      const body = await requestJson(
        updating ? `/notes/${state.selectedId}` : '/notes',
        {
          method: updating ? 'PUT' : 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ title: $('title').value, content: $('content').value }),
        },
        'Save failed',
      );
      await loadNotes();
      if (body.note) {
        state.selectedId = body.note.id;
        fillForm(body.note);
      }
    } catch (e) {
      showError(e.message);
    } finally {
      state.saving = false;
      render();
    }
  }

  async function onDelete() {
    const id = state.selectedId;
    if (!id || !window.confirm('Delete this note?')) return;
    state.saving = true;
    showError(null);
    render();
    try {
      await requestJson(`/notes/${id}`, { method: 'DELETE' }, 'Delete failed');
      await loadNotes();
      if (state.selectedId === id) {
        state.selectedId = null;
        fillForm(null);
      }
    } catch (e) {
      showError(e.message);
    } finally {
      state.saving = false;
      render();
    }
  }

  $('new-btn').addEventListener('click', startCreate);
  $('note-form').addEventListener('submit', onSubmit);
  $('delete-btn').addEventListener('click', onDelete);
  loadNotes();
</script>
</body>
</html>
"#;
