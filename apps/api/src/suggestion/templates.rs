// Template for the activity suggestion returned by the forslag operation.

/// Activity suggestion template.
/// Replace: {profile_upper}, {focus_area}, {competency_goal}, {activity}, {focus_area_lower}
pub const SUGGESTION_TEMPLATE: &str = "🎯 AKTIVITETSFORSLAG FOR {profile_upper}

📋 FOKUSOMRÅDE: {focus_area}

🎪 KOMPETENCEMÅL: {competency_goal}

✨ FORESLÅET AKTIVITET: {activity}

📝 KONKRET GENNEMFØRELSE:
• ⏱️ Varighed: 30-45 minutter
• 👥 Deltagere: 3-6 børn (tilpas efter behov)
• 🎨 Materialer: Papir, farver, legetøj, naturmaterialer (afhængig af aktivitet)
• 🔧 Forberedelse: 10-15 minutter
• 📍 Lokation: Indendørs eller udendørs efter aktivitetens karakter

🎯 LÆRINGSMÅL:
• Understøtte børns udvikling og trivsel
• Styrke professionelle kompetencer inden for {focus_area_lower}
• Dokumentere og reflektere over pædagogisk praksis
• Evaluere metoders effekt på børns læring

📊 EVALUERING OG DOKUMENTATION:
• 👀 Observer børnenes engagement og deltagelse
• 📸 Dokumenter læreprocesser gennem fotos/noter
• 🤔 Reflekter over aktivitetens forløb og udfald
• 📈 Evaluer egen rolle og pædagogiske tilgang

💭 REFLEKSIONSSPØRGSMÅL:
• Hvordan reagerede børnene på aktiviteten?
• Hvilke læreprocesser kunne du observere?
• Hvad fungerede godt, og hvad kunne forbedres?
• Hvordan understøttede aktiviteten dit kompetencemål?
• Hvilke nye indsigter har du fået om børnenes behov?

📚 RELATION TIL LÆREPLAN:
Baseret på den uploadede læreplan fokuserer denne aktivitet på kerneelementer som børns udvikling, professionel praksis og dokumentation af læreprocesser.

💡 NÆSTE SKRIDT:
1. Planlæg aktiviteten i detaljer
2. Forbered nødvendige materialer
3. Overvej hvordan du vil dokumentere forløbet
4. Evaluer og reflekter efter gennemførelse

🌟 TIP: Husk at inddrage børnenes egne ideer og interesser i aktiviteten!";
