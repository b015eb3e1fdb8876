use axum::response::Html;

const INDEX_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pet Care Tracker</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100 text-gray-800 font-sans antialiased">
    <main class="max-w-2xl mx-auto p-10">
        <h1 class="text-3xl font-bold text-purple-700 mb-4">Pet Care Tracker</h1>
        <p class="mb-6">Expenses, vaccinations and reports for your pet.</p>
        <ul class="space-y-2 font-mono text-sm">
            <li><a class="text-purple-600 hover:underline" href="/api/expenses">GET /api/expenses</a></li>
            <li><a class="text-purple-600 hover:underline" href="/api/vaccines">GET /api/vaccines</a></li>
            <li><a class="text-purple-600 hover:underline" href="/api/reports">GET /api/reports</a></li>
        </ul>
    </main>
</body>
</html>
"##;

/// GET / - Landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
