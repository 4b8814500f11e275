// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "ES" => {
            // Login / Registro
            translations.insert("app_title", "DosyaHub");
            translations.insert("app_subtitle", "Tus archivos, en cualquier lugar");
            translations.insert("email", "Correo electrónico");
            translations.insert("password", "Contraseña");
            translations.insert("first_name", "Nombre");
            translations.insert("last_name", "Apellido");
            translations.insert("sign_in", "Iniciar sesión");
            translations.insert("sign_up", "Crear cuenta");
            translations.insert("no_account", "¿No tienes cuenta?");
            translations.insert("have_account", "¿Ya tienes cuenta?");
            translations.insert("fill_all_fields", "Por favor, completa todos los campos");

            // Navbar / Ajustes
            translations.insert("logout", "⎋ Cerrar sesión");
            translations.insert("settings", "Ajustes");
            translations.insert("language", "Idioma");
            translations.insert("profile", "Perfil");
            translations.insert("change_password", "Cambiar contraseña");
            translations.insert("current_password", "Contraseña actual");
            translations.insert("new_password", "Nueva contraseña");
            translations.insert("save", "Guardar");
            translations.insert("cancel", "Cancelar");
            translations.insert("close", "Cerrar");

            // Listado de archivos
            translations.insert("my_files", "Mis archivos");
            translations.insert("search_placeholder", "Buscar archivos...");
            translations.insert("col_name", "Nombre");
            translations.insert("col_size", "Tamaño");
            translations.insert("col_date", "Fecha de subida");
            translations.insert("col_actions", "Acciones");
            translations.insert("no_files", "No hay archivos todavía");
            translations.insert("download", "Descargar");
            translations.insert("delete", "Eliminar");
            translations.insert("rename", "Renombrar");
            translations.insert("share", "Compartir");
            translations.insert("unshare", "Dejar de compartir");
            translations.insert("public", "Público");
            translations.insert("previous", "Anterior");
            translations.insert("next", "Siguiente");
            translations.insert("sort_date_desc", "Más recientes");
            translations.insert("sort_date_asc", "Más antiguos");
            translations.insert("sort_name", "Nombre");
            translations.insert("sort_size", "Tamaño");
            translations.insert("rename_prompt", "Nuevo nombre del archivo:");
            translations.insert("loading_files", "Cargando archivos...");

            // Subida
            translations.insert("upload_title", "Subir archivo");
            translations.insert("upload_button", "Subir");
            translations.insert("choose_file", "Elegir archivo");
            translations.insert("no_file_selected", "Ningún archivo seleccionado");
            translations.insert("unsupported_type", "Tipo de archivo no soportado (solo PDF, PNG o JPG)");

            // Avisos / errores
            translations.insert("success_upload", "Archivo subido correctamente");
            translations.insert("success_delete", "Archivo eliminado correctamente");
            translations.insert("success_rename", "Archivo renombrado correctamente");
            translations.insert("success_share", "Visibilidad del archivo actualizada");
            translations.insert("success_profile", "Perfil actualizado");
            translations.insert("success_password", "Contraseña cambiada");
            translations.insert("error_login", "No se pudo iniciar sesión");
            translations.insert("error_register", "No se pudo crear la cuenta");
            translations.insert("error_fetch_files", "Error cargando los archivos");
            translations.insert("error_upload", "Error subiendo el archivo");
            translations.insert("error_delete", "Error eliminando el archivo");
            translations.insert("error_download", "Error descargando el archivo");
            translations.insert("error_rename", "Error renombrando el archivo");
            translations.insert("error_share", "Error cambiando la visibilidad");
            translations.insert("error_profile", "Error actualizando el perfil");
            translations.insert("error_password", "Error cambiando la contraseña");
            translations.insert("session_expired", "Sesión expirada, vuelve a iniciar sesión");
        }
        "EN" => {
            translations.insert("app_title", "DosyaHub");
            translations.insert("app_subtitle", "Your files, anywhere");
            translations.insert("email", "Email");
            translations.insert("password", "Password");
            translations.insert("first_name", "First name");
            translations.insert("last_name", "Last name");
            translations.insert("sign_in", "Sign in");
            translations.insert("sign_up", "Create account");
            translations.insert("no_account", "Don't have an account?");
            translations.insert("have_account", "Already have an account?");
            translations.insert("fill_all_fields", "Please fill in all fields");

            translations.insert("logout", "⎋ Sign out");
            translations.insert("settings", "Settings");
            translations.insert("language", "Language");
            translations.insert("profile", "Profile");
            translations.insert("change_password", "Change password");
            translations.insert("current_password", "Current password");
            translations.insert("new_password", "New password");
            translations.insert("save", "Save");
            translations.insert("cancel", "Cancel");
            translations.insert("close", "Close");

            translations.insert("my_files", "My files");
            translations.insert("search_placeholder", "Search files...");
            translations.insert("col_name", "Name");
            translations.insert("col_size", "Size");
            translations.insert("col_date", "Upload date");
            translations.insert("col_actions", "Actions");
            translations.insert("no_files", "No files yet");
            translations.insert("download", "Download");
            translations.insert("delete", "Delete");
            translations.insert("rename", "Rename");
            translations.insert("share", "Share");
            translations.insert("unshare", "Unshare");
            translations.insert("public", "Public");
            translations.insert("previous", "Previous");
            translations.insert("next", "Next");
            translations.insert("sort_date_desc", "Newest first");
            translations.insert("sort_date_asc", "Oldest first");
            translations.insert("sort_name", "Name");
            translations.insert("sort_size", "Size");
            translations.insert("rename_prompt", "New file name:");
            translations.insert("loading_files", "Loading files...");

            translations.insert("upload_title", "Upload file");
            translations.insert("upload_button", "Upload");
            translations.insert("choose_file", "Choose file");
            translations.insert("no_file_selected", "No file selected");
            translations.insert("unsupported_type", "Unsupported file type (only PDF, PNG or JPG)");

            translations.insert("success_upload", "File uploaded successfully");
            translations.insert("success_delete", "File deleted successfully");
            translations.insert("success_rename", "File renamed successfully");
            translations.insert("success_share", "File visibility updated");
            translations.insert("success_profile", "Profile updated");
            translations.insert("success_password", "Password changed");
            translations.insert("error_login", "Could not sign in");
            translations.insert("error_register", "Could not create the account");
            translations.insert("error_fetch_files", "Error loading files");
            translations.insert("error_upload", "Error uploading the file");
            translations.insert("error_delete", "Error deleting the file");
            translations.insert("error_download", "Error downloading the file");
            translations.insert("error_rename", "Error renaming the file");
            translations.insert("error_share", "Error changing file visibility");
            translations.insert("error_profile", "Error updating profile");
            translations.insert("error_password", "Error changing password");
            translations.insert("session_expired", "Session expired, please sign in again");
        }
        // "FR" y cualquier otro valor
        _ => {
            translations.insert("app_title", "DosyaHub");
            translations.insert("app_subtitle", "Vos fichiers, partout");
            translations.insert("email", "E-mail");
            translations.insert("password", "Mot de passe");
            translations.insert("first_name", "Prénom");
            translations.insert("last_name", "Nom");
            translations.insert("sign_in", "Se connecter");
            translations.insert("sign_up", "Créer un compte");
            translations.insert("no_account", "Pas encore de compte ?");
            translations.insert("have_account", "Déjà un compte ?");
            translations.insert("fill_all_fields", "Veuillez remplir tous les champs");

            translations.insert("logout", "⎋ Déconnexion");
            translations.insert("settings", "Paramètres");
            translations.insert("language", "Langue");
            translations.insert("profile", "Profil");
            translations.insert("change_password", "Changer le mot de passe");
            translations.insert("current_password", "Mot de passe actuel");
            translations.insert("new_password", "Nouveau mot de passe");
            translations.insert("save", "Enregistrer");
            translations.insert("cancel", "Annuler");
            translations.insert("close", "Fermer");

            translations.insert("my_files", "Mes fichiers");
            translations.insert("search_placeholder", "Rechercher des fichiers...");
            translations.insert("col_name", "Nom");
            translations.insert("col_size", "Taille");
            translations.insert("col_date", "Date d'ajout");
            translations.insert("col_actions", "Actions");
            translations.insert("no_files", "Aucun fichier pour le moment");
            translations.insert("download", "Télécharger");
            translations.insert("delete", "Supprimer");
            translations.insert("rename", "Renommer");
            translations.insert("share", "Partager");
            translations.insert("unshare", "Ne plus partager");
            translations.insert("public", "Public");
            translations.insert("previous", "Précédent");
            translations.insert("next", "Suivant");
            translations.insert("sort_date_desc", "Plus récents");
            translations.insert("sort_date_asc", "Plus anciens");
            translations.insert("sort_name", "Nom");
            translations.insert("sort_size", "Taille");
            translations.insert("rename_prompt", "Nouveau nom du fichier :");
            translations.insert("loading_files", "Chargement des fichiers...");

            translations.insert("upload_title", "Téléverser un fichier");
            translations.insert("upload_button", "Téléverser");
            translations.insert("choose_file", "Choisir un fichier");
            translations.insert("no_file_selected", "Aucun fichier sélectionné");
            translations.insert("unsupported_type", "Type de fichier non supporté (PDF, PNG ou JPG uniquement)");

            translations.insert("success_upload", "Fichier téléversé avec succès");
            translations.insert("success_delete", "Fichier supprimé avec succès");
            translations.insert("success_rename", "Fichier renommé avec succès");
            translations.insert("success_share", "Visibilité du fichier mise à jour");
            translations.insert("success_profile", "Profil mis à jour");
            translations.insert("success_password", "Mot de passe changé");
            translations.insert("error_login", "Connexion impossible");
            translations.insert("error_register", "Impossible de créer le compte");
            translations.insert("error_fetch_files", "Erreur lors du chargement des fichiers");
            translations.insert("error_upload", "Erreur lors du téléversement");
            translations.insert("error_delete", "Erreur lors de la suppression");
            translations.insert("error_download", "Erreur lors du téléchargement");
            translations.insert("error_rename", "Erreur lors du renommage");
            translations.insert("error_share", "Erreur lors du changement de visibilité");
            translations.insert("error_profile", "Erreur lors de la mise à jour du profil");
            translations.insert("error_password", "Erreur lors du changement de mot de passe");
            translations.insert("session_expired", "Session expirée, veuillez vous reconnecter");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("FR", "ES" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(t("sign_in", "FR"), "Se connecter");
        assert_eq!(t("sign_in", "ES"), "Iniciar sesión");
        assert_eq!(t("sign_in", "EN"), "Sign in");
    }

    #[test]
    fn unknown_language_falls_back_to_french() {
        assert_eq!(t("sign_in", "DE"), "Se connecter");
    }

    #[test]
    fn unknown_key_returns_key() {
        assert_eq!(t("does_not_exist", "FR"), "does_not_exist");
    }

    #[test]
    fn lowercase_language_code_accepted() {
        assert_eq!(t("sign_in", "es"), "Iniciar sesión");
    }

    #[test]
    fn every_error_key_exists_in_all_languages() {
        let keys = [
            "error_login",
            "error_register",
            "error_fetch_files",
            "error_upload",
            "error_delete",
            "error_download",
            "session_expired",
            "unsupported_type",
        ];
        for lang in ["FR", "ES", "EN"] {
            for key in keys {
                assert_ne!(t(key, lang), key, "falta {} en {}", key, lang);
            }
        }
    }
}
