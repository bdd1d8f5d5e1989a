// Template for the canned curriculum summary returned by the opsummering operation.

/// Curriculum summary template.
/// Replace: {filename}, {size_kb}
pub const SUMMARY_TEMPLATE: &str = "📋 LÆREPLAN OPSUMMERING ({filename})

🎯 HOVEDOMRÅDER:
• Pædagogisk praksis og metodisk tilgang
• Børns udvikling, læring og trivsel (0-5 år)
• Professionel kommunikation og relationsdannelse
• Dokumentation og evaluering af pædagogisk arbejde

📚 KOMPETENCEMÅL:
• Tilrettelæggelse og gennemførelse af pædagogiske aktiviteter
• Skabelse af nærværende relationer til børn og familier
• Understøttelse af børns leg, læring og udvikling
• Professionel kommunikation med kolleger og forældre

🔍 FOKUSOMRÅDER:
• Observation og dokumentation af børns læreprocesser
• Sundhedsfremmende og forebyggende arbejde
• Æstetiske, musiske og kreative aktiviteter
• Tværfagligt samarbejde og udvikling af praksis

👥 MÅLGRUPPER:
• Børn i alderen 0-5 år i dagtilbud
• Særligt fokus på børn med særlige behov
• Inddragelse af forældre og familier

📊 DOKUMENTETS INDHOLD:
• Filnavn: {filename}
• Størrelse: {size_kb} KB
• Type: PDF læreplan

💡 NÆSTE SKRIDT:
Vælg din praktikprofil og få målrettede aktivitetsforslag baseret på denne læreplan.";
